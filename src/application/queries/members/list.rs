// src/application/queries/members/list.rs
use super::MemberQueryService;
use crate::application::{dto::MemberDto, error::ApplicationResult};

impl MemberQueryService {
    pub async fn list_members(&self) -> ApplicationResult<Vec<MemberDto>> {
        let members = self.read_repo.find_all().await?;
        Ok(members.into_iter().map(Into::into).collect())
    }
}
