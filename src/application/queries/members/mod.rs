// src/application/queries/members/mod.rs
mod get_by_id;
mod list;
mod search;
mod service;

pub use get_by_id::GetMemberByIdQuery;
pub use search::SearchMembersByNameQuery;
pub use service::MemberQueryService;
