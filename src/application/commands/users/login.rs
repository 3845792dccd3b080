// src/application/commands/users/login.rs
use super::UserCommandService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::Username,
};

pub struct LoginCommand {
    pub username: String,
    pub password: String,
}

impl UserCommandService {
    /// Check the submitted credentials against the stored hash. Unknown users
    /// and wrong passwords produce the same `Unauthorized` error.
    pub async fn login(&self, command: LoginCommand) -> ApplicationResult<UserDto> {
        let username = Username::new(command.username)
            .map_err(|_| ApplicationError::unauthorized("invalid credentials"))?;

        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid credentials"))?;

        self.password_hasher
            .verify(&command.password, user.password_hash.as_str())
            .await?;

        Ok(user.into())
    }
}
