//! Use case error types

use std::error::Error;
use std::fmt;

use user_core::error::BoxError;

use crate::services::{ServiceError, ServiceErrorContext};

/// Why a use case failed, as seen by the transport layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UseCaseErrorContext {
    Unexpected,
    ParseError,
    NotFound,
    Conflict,
    Database,
    InvalidInput,
}

impl UseCaseErrorContext {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unexpected => "unexpected",
            Self::ParseError => "parse error",
            Self::NotFound => "not found",
            Self::Conflict => "conflict",
            Self::Database => "database",
            Self::InvalidInput => "invalid input",
        }
    }
}

impl fmt::Display for UseCaseErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Use case error type
#[derive(Debug)]
pub struct UseCaseError {
    context: UseCaseErrorContext,
    message: Option<String>,
    inner: BoxError,
}

impl UseCaseError {
    /// Wrap `inner` under the given context
    pub fn new(context: UseCaseErrorContext, inner: impl Into<BoxError>) -> Self {
        Self {
            context,
            message: None,
            inner: inner.into(),
        }
    }

    /// Wrap `inner` under the given context with an additional message
    pub fn with_message(
        context: UseCaseErrorContext,
        inner: impl Into<BoxError>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            context,
            message: Some(message.into()),
            inner: inner.into(),
        }
    }

    pub fn context(&self) -> UseCaseErrorContext {
        self.context
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn inner(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.inner.as_ref()
    }
}

impl fmt::Display for UseCaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(msg) => write!(f, "UseCaseError: {msg}"),
            None => write!(f, "UseCaseError: {}", self.context),
        }
    }
}

impl Error for UseCaseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.inner.as_ref() as &(dyn Error + 'static))
    }
}

/// Classify a service failure for the transport layer
///
/// | service      | use case       |
/// |--------------|----------------|
/// | `Validation` | `InvalidInput` |
/// | `Repository` | `Database`     |
/// | `Unexpected` | `Unexpected`   |
pub fn convert_service_to_usecase_error(err: ServiceError) -> UseCaseError {
    let context = match err.context() {
        ServiceErrorContext::Validation => UseCaseErrorContext::InvalidInput,
        ServiceErrorContext::Repository => UseCaseErrorContext::Database,
        ServiceErrorContext::Unexpected => UseCaseErrorContext::Unexpected,
    };
    UseCaseError::new(context, err)
}

impl From<ServiceError> for UseCaseError {
    fn from(err: ServiceError) -> Self {
        convert_service_to_usecase_error(err)
    }
}

/// Result type alias for use case operations
pub type UseCaseResult<T> = Result<T, UseCaseError>;
