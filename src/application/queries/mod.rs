// src/application/queries/mod.rs
pub mod articles;
pub mod members;
pub mod users;
