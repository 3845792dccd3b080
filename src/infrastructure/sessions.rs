// src/infrastructure/sessions.rs
use std::time::Duration;
use tokio::task::JoinHandle;
use tower_sessions::ExpiredDeletion;
use tower_sessions_sqlx_store::SqliteStore;

/// Create the session table if needed.
pub async fn init_session_store(pool: sqlx::SqlitePool) -> Result<SqliteStore, sqlx::Error> {
    let store = SqliteStore::new(pool);
    store.migrate().await?;
    Ok(store)
}

/// Purge expired session rows every `period` until the returned task is
/// aborted. A failing sweep is logged and ends the task.
pub fn spawn_expired_session_cleanup(store: SqliteStore, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(err) = store.continuously_delete_expired(period).await {
            tracing::error!(error = %err, "expired session cleanup stopped");
        }
    })
}
