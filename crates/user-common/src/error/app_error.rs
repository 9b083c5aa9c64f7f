//! Application error types
//!
//! Errors raised while bootstrapping and running the process: loading
//! configuration, connecting to the database, binding the listener.
//! Request-level failures travel through the layered error chain instead.

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    // Server errors
    #[error("Server error: {0}")]
    Server(String),
}

impl AppError {
    /// Get error code for logs and exit reporting
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Server(_) => "SERVER_ERROR",
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
