// src/application/dto/articles.rs
use crate::domain::article::Article;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Read-only projection of an article as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub content: String,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        let id = article.id().into();
        Self {
            id,
            title: article.title,
            content: article.content,
        }
    }
}
