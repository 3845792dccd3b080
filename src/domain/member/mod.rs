// src/domain/member/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Member, NewMember};
pub use repository::{MemberReadRepository, MemberWriteRepository};
pub use value_objects::{MemberId, MemberName};
