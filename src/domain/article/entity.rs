// src/domain/article/entity.rs
use crate::domain::article::value_objects::ArticleId;

/// A stored blog article. The id is assigned by the store on insert and never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    id: ArticleId,
    pub title: String,
    pub content: String,
}

impl Article {
    pub fn new(id: ArticleId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn update(&mut self, title: impl Into<String>, content: impl Into<String>) {
        self.title = title.into();
        self.content = content.into();
    }
}

/// An article that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    pub title: String,
    pub content: String,
}

impl NewArticle {
    pub fn builder() -> NewArticleBuilder {
        NewArticleBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct NewArticleBuilder {
    title: String,
    content: String,
}

impl NewArticleBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn build(self) -> NewArticle {
        NewArticle {
            title: self.title,
            content: self.content,
        }
    }
}
