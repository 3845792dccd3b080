// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

const CNT_USER_USERNAME: &str = "users_username_key";

/// A stored row that no longer satisfies the domain invariants is a storage
/// fault, not bad client input.
pub(super) fn invalid_row(table: &str, err: DomainError) -> DomainError {
    DomainError::Persistence(format!("invalid {table} row: {err}"))
}

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::RowNotFound => DomainError::NotFound("row not found".into()),
        sqlx::Error::Database(db_err) => {
            if db_err.is_unique_violation() {
                // SQLite does not report constraint names, so match the message too.
                if db_err.constraint() == Some(CNT_USER_USERNAME)
                    || db_err.message().contains("users.username")
                {
                    return DomainError::Conflict("username already exists".into());
                }
                return DomainError::Conflict("unique constraint violated".into());
            }

            if db_err.is_check_violation() {
                return DomainError::Validation("check constraint violated".into());
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
