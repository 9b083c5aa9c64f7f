//! Service layer error types

use std::error::Error;
use std::fmt;

use user_core::error::{BoxError, ModelError, RepositoryError};

/// Why a service operation failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceErrorContext {
    Unexpected,
    Repository,
    Validation,
}

impl ServiceErrorContext {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unexpected => "unexpected",
            Self::Repository => "repository",
            Self::Validation => "validation",
        }
    }
}

impl fmt::Display for ServiceErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Service layer error type
#[derive(Debug)]
pub struct ServiceError {
    context: ServiceErrorContext,
    message: Option<String>,
    inner: BoxError,
}

impl ServiceError {
    /// Wrap `inner` under the given context
    pub fn new(context: ServiceErrorContext, inner: impl Into<BoxError>) -> Self {
        Self {
            context,
            message: None,
            inner: inner.into(),
        }
    }

    /// Wrap `inner` under the given context with an additional message
    pub fn with_message(
        context: ServiceErrorContext,
        inner: impl Into<BoxError>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            context,
            message: Some(message.into()),
            inner: inner.into(),
        }
    }

    /// Create a validation error
    pub fn validation(inner: impl Into<BoxError>) -> Self {
        Self::new(ServiceErrorContext::Validation, inner)
    }

    /// Create a repository error
    pub fn repository(inner: impl Into<BoxError>) -> Self {
        Self::new(ServiceErrorContext::Repository, inner)
    }

    /// Create an unexpected error
    pub fn unexpected(inner: impl Into<BoxError>) -> Self {
        Self::new(ServiceErrorContext::Unexpected, inner)
    }

    pub fn context(&self) -> ServiceErrorContext {
        self.context
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn inner(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.inner.as_ref()
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(msg) => write!(f, "ServiceError: {msg}"),
            None => write!(f, "ServiceError: {}", self.context),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.inner.as_ref() as &(dyn Error + 'static))
    }
}

impl From<ModelError> for ServiceError {
    fn from(err: ModelError) -> Self {
        Self::validation(err)
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        Self::repository(err)
    }
}

/// Result type alias for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
