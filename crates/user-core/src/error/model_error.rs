//! Model error - raised when a value object or command fails validation

use std::error::Error;
use std::fmt;

use super::BoxError;

/// Construction or validation failure of a domain model
///
/// Carries no context: the only thing a model can say is that the input
/// it was given does not satisfy its invariants.
#[derive(Debug)]
pub struct ModelError {
    message: String,
    inner: Option<BoxError>,
}

impl ModelError {
    /// Create a model error with a message and no underlying cause
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            inner: None,
        }
    }

    /// Create a model error wrapping the error that caused it
    pub fn with_inner(message: impl Into<String>, inner: impl Into<BoxError>) -> Self {
        Self {
            message: message.into(),
            inner: Some(inner.into()),
        }
    }

    /// Human readable reason
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Underlying cause, if any
    pub fn inner(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.inner.as_deref()
    }
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModelError: {}", self.message)
    }
}

impl Error for ModelError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.inner
            .as_deref()
            .map(|e| e as &(dyn Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_message() {
        let err = ModelError::new("Name is required");
        assert_eq!(err.to_string(), "ModelError: Name is required");
        assert_eq!(err.message(), "Name is required");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_inner_is_exposed_as_source() {
        let parse_err = "zz".parse::<u8>().unwrap_err();
        let err = ModelError::with_inner("Invalid user id", parse_err);
        assert!(err.inner().is_some());
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "ModelError: Invalid user id");
    }
}
