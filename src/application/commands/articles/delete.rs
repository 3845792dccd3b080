// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{application::error::ApplicationResult, domain::article::ArticleId};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Silent when no article has this id, including ids the store can never
    /// assign (zero or negative).
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let Ok(id) = ArticleId::new(command.id) else {
            return Ok(());
        };
        self.write_repo.delete_by_id(id).await?;
        tracing::info!(article_id = %id, "article deleted");
        Ok(())
    }
}
