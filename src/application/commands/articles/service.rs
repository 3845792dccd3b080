// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::domain::article::{ArticleReadRepository, ArticleWriteRepository};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
        }
    }
}
