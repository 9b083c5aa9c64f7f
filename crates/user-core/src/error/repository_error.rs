//! Repository error - raised when persistence fails

use std::error::Error;
use std::fmt;

use super::BoxError;

/// Persistence failure
///
/// Wraps the driver error verbatim. There is no context: "row not found"
/// and "connection refused" look the same from here on up.
#[derive(Debug)]
pub struct RepositoryError {
    message: Option<String>,
    inner: BoxError,
}

impl RepositoryError {
    /// Wrap an underlying storage error
    pub fn new(inner: impl Into<BoxError>) -> Self {
        Self {
            message: None,
            inner: inner.into(),
        }
    }

    /// Wrap an underlying storage error with an additional message
    pub fn with_message(inner: impl Into<BoxError>, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            inner: inner.into(),
        }
    }

    /// Optional message attached at the point of failure
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The wrapped storage error
    pub fn inner(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.inner.as_ref()
    }
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(msg) => write!(f, "RepositoryError: {msg}"),
            None => f.write_str("RepositoryError"),
        }
    }
}

impl Error for RepositoryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.inner.as_ref() as &(dyn Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_without_message() {
        let err = RepositoryError::new(std::io::Error::other("boom"));
        assert_eq!(err.to_string(), "RepositoryError");
        assert!(err.message().is_none());
        assert_eq!(err.inner().to_string(), "boom");
    }

    #[test]
    fn test_display_with_message() {
        let err = RepositoryError::with_message(std::io::Error::other("boom"), "select failed");
        assert_eq!(err.to_string(), "RepositoryError: select failed");
        assert_eq!(err.source().map(ToString::to_string), Some("boom".to_string()));
    }
}
