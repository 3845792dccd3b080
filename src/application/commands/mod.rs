// src/application/commands/mod.rs
pub mod articles;
pub mod users;
