// src/application/queries/users/get_by_id.rs
use super::UserQueryService;
use crate::{
    application::{dto::UserDto, error::ApplicationResult},
    domain::user::UserId,
};

pub struct FindUserByIdQuery {
    pub id: i64,
}

impl UserQueryService {
    /// `None` when no account has this id, e.g. a session outliving a deleted
    /// user.
    pub async fn find_user_by_id(
        &self,
        query: FindUserByIdQuery,
    ) -> ApplicationResult<Option<UserDto>> {
        let Ok(id) = UserId::new(query.id) else {
            return Ok(None);
        };
        let user = self.user_repo.find_by_id(id).await?;
        Ok(user.map(Into::into))
    }
}
