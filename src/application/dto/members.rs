// src/application/dto/members.rs
use crate::domain::member::Member;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MemberDto {
    pub id: i64,
    pub name: String,
}

impl From<Member> for MemberDto {
    fn from(member: Member) -> Self {
        Self {
            id: member.id.into(),
            name: member.name.into(),
        }
    }
}
