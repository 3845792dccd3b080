// src/presentation/http/session.rs
//! Typed access to the authentication data stored in the server-side session.
use tower_sessions::{Session, session};

const SESSION_AUTH_USER_ID: &str = "auth:user";

pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Bind the session to `user_id`. The session id is rotated first so an
    /// id issued before login cannot be reused afterwards.
    pub async fn log_in(&self, user_id: i64) -> Result<(), session::Error> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await
    }

    pub async fn user_id(&self) -> Result<Option<i64>, session::Error> {
        self.session.get::<i64>(SESSION_AUTH_USER_ID).await
    }

    pub async fn is_authenticated(&self) -> Result<bool, session::Error> {
        Ok(self.user_id().await?.is_some())
    }

    /// Drop all session data and delete the record from the store.
    pub async fn log_out(&self) -> Result<(), session::Error> {
        self.session.flush().await
    }
}
