// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: String,
    pub content: String,
}

impl ArticleCommandService {
    pub async fn update_article(&self, command: UpdateArticleCommand) -> ApplicationResult<ArticleDto> {
        let UpdateArticleCommand { id, title, content } = command;
        let id = ArticleId::new(id).map_err(|_| ApplicationError::not_found("article not found"))?;
        let mut article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        article.update(title, content);

        let updated = self.write_repo.update(&article).await?;
        tracing::info!(article_id = %id, "article updated");
        Ok(updated.into())
    }
}
