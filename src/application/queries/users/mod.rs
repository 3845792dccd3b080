// src/application/queries/users/mod.rs
mod get_by_id;
mod service;

pub use get_by_id::FindUserByIdQuery;
pub use service::UserQueryService;
