//! Handler error type
//!
//! Raised by handlers and extractors. Wraps either the decoding failure or
//! the [`UseCaseError`] returned by the use case.

use std::error::Error;
use std::fmt;

use axum::http::StatusCode;
use user_core::error::BoxError;
use user_service::{UseCaseError, UseCaseErrorContext};

use crate::response::error_context_to_status_code;

/// Message attached to every request decoding failure
pub const INVALID_INPUT: &str = "Invalid input";

/// Where in the handler the request failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerErrorContext {
    /// Request body or path could not be decoded
    ParseError,
    /// The use case returned an error
    UseCase,
    InternalService,
}

impl HandlerErrorContext {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ParseError => "parse error",
            Self::UseCase => "use case",
            Self::InternalService => "internal service",
        }
    }
}

impl fmt::Display for HandlerErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
pub struct HandlerError {
    context: HandlerErrorContext,
    message: Option<String>,
    inner: BoxError,
}

impl HandlerError {
    /// Wrap `inner` under the given context
    pub fn new(context: HandlerErrorContext, inner: impl Into<BoxError>) -> Self {
        Self {
            context,
            message: None,
            inner: inner.into(),
        }
    }

    /// Wrap `inner` under the given context with an additional message
    pub fn with_message(
        context: HandlerErrorContext,
        inner: impl Into<BoxError>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            context,
            message: Some(message.into()),
            inner: inner.into(),
        }
    }

    /// Request decoding failed; `message` ends up in the response details
    pub fn parse_error(inner: impl Into<BoxError>, message: impl Into<String>) -> Self {
        Self::with_message(HandlerErrorContext::ParseError, inner, message)
    }

    /// Wrap a use case failure as-is; the status is picked from its context later
    pub fn use_case(err: UseCaseError) -> Self {
        Self::new(HandlerErrorContext::UseCase, err)
    }

    pub fn internal_service(inner: impl Into<BoxError>) -> Self {
        Self::new(HandlerErrorContext::InternalService, inner)
    }

    pub fn context(&self) -> HandlerErrorContext {
        self.context
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn inner(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.inner.as_ref()
    }

    /// The wrapped use case error, if that is what this error carries
    pub fn use_case_error(&self) -> Option<&UseCaseError> {
        self.inner.downcast_ref::<UseCaseError>()
    }

    /// HTTP status for this error
    ///
    /// Parse errors are always 400. Anything else is decided by the context
    /// of the wrapped use case error, or 500 when there is none.
    pub fn status_code(&self) -> StatusCode {
        match self.context {
            HandlerErrorContext::ParseError => StatusCode::BAD_REQUEST,
            HandlerErrorContext::UseCase | HandlerErrorContext::InternalService => self
                .use_case_error()
                .map_or(StatusCode::INTERNAL_SERVER_ERROR, |err| {
                    error_context_to_status_code(err.context())
                }),
        }
    }

    /// Text for the `details` field of the error response
    ///
    /// Never includes the causes below the use case error.
    pub fn details(&self) -> String {
        if let Some(msg) = &self.message {
            return msg.clone();
        }
        match self.use_case_error() {
            Some(err) => err.to_string(),
            None => self.to_string(),
        }
    }
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(msg) => write!(f, "HandlerError: {msg}"),
            None => write!(f, "HandlerError: {}", self.context),
        }
    }
}

impl Error for HandlerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.inner.as_ref() as &(dyn Error + 'static))
    }
}

/// Classify a use case failure for the transport layer
///
/// Invalid input is reported as a parse error, everything else keeps the
/// use case context for the status lookup.
pub fn convert_usecase_error_to_handler_error(err: UseCaseError) -> HandlerError {
    match err.context() {
        UseCaseErrorContext::InvalidInput => {
            HandlerError::new(HandlerErrorContext::ParseError, err)
        }
        UseCaseErrorContext::Unexpected
        | UseCaseErrorContext::ParseError
        | UseCaseErrorContext::NotFound
        | UseCaseErrorContext::Conflict
        | UseCaseErrorContext::Database => HandlerError::use_case(err),
    }
}

impl From<UseCaseError> for HandlerError {
    fn from(err: UseCaseError) -> Self {
        convert_usecase_error_to_handler_error(err)
    }
}
