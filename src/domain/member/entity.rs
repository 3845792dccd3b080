// src/domain/member/entity.rs
use crate::domain::member::value_objects::{MemberId, MemberName};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: MemberId,
    pub name: MemberName,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewMember {
    pub name: MemberName,
}

impl NewMember {
    pub fn new(name: MemberName) -> Self {
        Self { name }
    }
}
