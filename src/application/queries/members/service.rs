// src/application/queries/members/service.rs
use std::sync::Arc;

use crate::domain::member::MemberReadRepository;

pub struct MemberQueryService {
    pub(super) read_repo: Arc<dyn MemberReadRepository>,
}

impl MemberQueryService {
    pub fn new(read_repo: Arc<dyn MemberReadRepository>) -> Self {
        Self { read_repo }
    }
}
