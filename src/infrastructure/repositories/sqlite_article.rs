// src/infrastructure/repositories/sqlite_article.rs
use super::{invalid_row, map_sqlx};
use crate::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};

#[derive(Clone)]
pub struct SqliteArticleRepository {
    pool: SqlitePool,
}

impl SqliteArticleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    content: String,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        let id = ArticleId::new(row.id).map_err(|err| invalid_row("article", err))?;
        Ok(Article::new(id, row.title, row.content))
    }
}

#[async_trait]
impl ArticleWriteRepository for SqliteArticleRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle { title, content } = article;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO article (title, content) VALUES (?, ?) RETURNING id, title, content",
        )
        .bind(title)
        .bind(content)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, article: &Article) -> DomainResult<Article> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "UPDATE article SET title = ?, content = ? WHERE id = ? RETURNING id, title, content",
        )
        .bind(&article.title)
        .bind(&article.content)
        .bind(i64::from(article.id()))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound(format!("article {} not found", article.id())))?;

        Article::try_from(row)
    }

    async fn delete_by_id(&self, id: ArticleId) -> DomainResult<()> {
        sqlx::query("DELETE FROM article WHERE id = ?")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleRepository {
    async fn find_all(&self) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, title, content FROM article ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, title, content FROM article WHERE id = ?",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn count(&self) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM article")
            .fetch_one(&self.pool)
            .await
            .map(|count| count.unsigned_abs())
            .map_err(map_sqlx)
    }
}
