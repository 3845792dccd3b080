// tests/support/mocks/article_repos.rs
use async_trait::async_trait;
use blog_api::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleWriteRepository, NewArticle,
};
use blog_api::domain::errors::{DomainError, DomainResult};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Article store backed by a `BTreeMap`, handing out ids from 1 upwards like
/// an auto-increment column.
#[derive(Default)]
pub struct InMemoryArticleRepo {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    rows: BTreeMap<i64, Article>,
}

impl InMemoryArticleRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let id = ArticleId::new(inner.next_id)?;
        let created = Article::new(id, article.title, article.content);
        inner.rows.insert(i64::from(id), created.clone());
        Ok(created)
    }

    async fn update(&self, article: &Article) -> DomainResult<Article> {
        let mut inner = self.inner.lock().unwrap();
        match inner.rows.get_mut(&i64::from(article.id())) {
            Some(row) => {
                *row = article.clone();
                Ok(article.clone())
            }
            None => Err(DomainError::NotFound("article not found".into())),
        }
    }

    async fn delete_by_id(&self, id: ArticleId) -> DomainResult<()> {
        self.inner.lock().unwrap().rows.remove(&i64::from(id));
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_all(&self) -> DomainResult<Vec<Article>> {
        Ok(self.inner.lock().unwrap().rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.inner.lock().unwrap().rows.get(&i64::from(id)).cloned())
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(self.inner.lock().unwrap().rows.len() as u64)
    }
}
