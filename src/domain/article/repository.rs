// src/domain/article/repository.rs
use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Persist a new article; the store assigns its id.
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Overwrite title and content of an existing row. Fails with
    /// `DomainError::NotFound` when the row is gone.
    async fn update(&self, article: &Article) -> DomainResult<Article>;
    /// Remove the row if present. Deleting a missing id is not an error.
    async fn delete_by_id(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_all(&self) -> DomainResult<Vec<Article>>;
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn count(&self) -> DomainResult<u64>;
}
