//! Error handling utilities for repositories

use sqlx::Error as SqlxError;
use user_core::error::RepositoryError;

/// Wrap a SQLx error as a RepositoryError
///
/// The driver error is kept as the source. `RowNotFound` gets a short
/// message so logs can tell it apart from connectivity failures.
pub fn map_db_error(e: SqlxError) -> RepositoryError {
    match e {
        SqlxError::RowNotFound => RepositoryError::with_message(e, "no rows"),
        other => RepositoryError::new(other),
    }
}
