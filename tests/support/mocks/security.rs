// tests/support/mocks/security.rs
use async_trait::async_trait;
use blog_api::application::{
    ApplicationResult, error::ApplicationError, ports::security::PasswordHasher,
};

/// Stores passwords with a visible prefix instead of hashing them, so tests
/// do not pay for argon2.
#[derive(Clone, Debug, Default)]
pub struct PlaintextPasswordHasher;

const PREFIX: &str = "plain:";

#[async_trait]
impl PasswordHasher for PlaintextPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("{PREFIX}{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        match expected_hash.strip_prefix(PREFIX) {
            Some(stored) if stored == password => Ok(()),
            _ => Err(ApplicationError::unauthorized("invalid credentials")),
        }
    }
}
