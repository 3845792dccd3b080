// src/application/dto/mod.rs
pub mod articles;
pub mod members;
pub mod users;

pub use articles::ArticleDto;
pub use members::MemberDto;
pub use users::UserDto;
