// src/application/commands/users/mod.rs
mod login;
mod password;
mod service;
mod sign_up;

pub use login::LoginCommand;
pub use service::UserCommandService;
pub use sign_up::SignUpCommand;
