// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_article;
mod sqlite_member;
mod sqlite_user;

pub use error::map_sqlx;
use error::invalid_row;
pub use sqlite_article::SqliteArticleRepository;
pub use sqlite_member::SqliteMemberRepository;
pub use sqlite_user::SqliteUserRepository;

#[cfg(test)]
pub(crate) async fn memory_pool() -> sqlx::SqlitePool {
    let pool = crate::infrastructure::database::init_pool("sqlite::memory:", 1)
        .await
        .expect("in-memory pool");
    crate::infrastructure::database::run_migrations(&pool)
        .await
        .expect("migrations");
    pool
}
