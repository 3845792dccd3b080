// src/application/queries/members/get_by_id.rs
use super::MemberQueryService;
use crate::{
    application::{
        dto::MemberDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::member::MemberId,
};

pub struct GetMemberByIdQuery {
    pub id: i64,
}

impl MemberQueryService {
    pub async fn get_member_by_id(&self, query: GetMemberByIdQuery) -> ApplicationResult<MemberDto> {
        let id =
            MemberId::new(query.id).map_err(|_| ApplicationError::not_found("member not found"))?;
        let member = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("member not found"))?;
        Ok(member.into())
    }
}
