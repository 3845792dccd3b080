// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::NewArticle,
};

pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
}

impl From<CreateArticleCommand> for NewArticle {
    fn from(command: CreateArticleCommand) -> Self {
        NewArticle::builder()
            .title(command.title)
            .content(command.content)
            .build()
    }
}

impl ArticleCommandService {
    pub async fn create_article(&self, command: CreateArticleCommand) -> ApplicationResult<ArticleDto> {
        let created = self.write_repo.insert(command.into()).await?;
        tracing::info!(article_id = %created.id(), "article created");
        Ok(created.into())
    }
}
