// tests/support/mocks/mod.rs
pub mod article_repos;
pub mod security;
pub mod time;
pub mod user_repo;

pub use article_repos::InMemoryArticleRepo;
pub use security::PlaintextPasswordHasher;
pub use time::{FixedClock, fixed_now};
pub use user_repo::InMemoryUserRepo;
