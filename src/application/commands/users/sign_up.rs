// src/application/commands/users/sign_up.rs
use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{NewUser, PasswordHash, Username},
};

pub struct SignUpCommand {
    pub username: String,
    pub password: String,
}

impl UserCommandService {
    pub async fn sign_up(&self, command: SignUpCommand) -> ApplicationResult<UserDto> {
        let username = Username::new(command.username)?;
        validate_password(&command.password)?;

        if self.user_repo.find_by_username(&username).await?.is_some() {
            return Err(ApplicationError::conflict("username already exists"));
        }

        let hashed = self.password_hasher.hash(&command.password).await?;
        let new_user = NewUser::new(username, PasswordHash::new(hashed)?, self.clock.now());
        let user = self.user_repo.insert(new_user).await?;

        tracing::info!(user_id = i64::from(user.id), "user signed up");
        Ok(user.into())
    }
}
