// src/domain/member/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::member::{
    entity::{Member, NewMember},
    value_objects::{MemberId, MemberName},
};
use async_trait::async_trait;

#[async_trait]
pub trait MemberReadRepository: Send + Sync {
    async fn find_all(&self) -> DomainResult<Vec<Member>>;
    async fn find_by_id(&self, id: MemberId) -> DomainResult<Option<Member>>;
    /// Exact, case-sensitive match on the name column.
    async fn find_by_name(&self, name: &MemberName) -> DomainResult<Vec<Member>>;
    async fn count(&self) -> DomainResult<u64>;
}

#[async_trait]
pub trait MemberWriteRepository: Send + Sync {
    async fn insert(&self, member: NewMember) -> DomainResult<Member>;
    async fn update(&self, member: &Member) -> DomainResult<Member>;
    async fn delete_by_id(&self, id: MemberId) -> DomainResult<()>;
}
