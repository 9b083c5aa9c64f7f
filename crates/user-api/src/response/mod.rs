//! Response types and error rendering for API endpoints

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use user_core::report;
use user_service::UseCaseErrorContext;

use crate::error::HandlerError;

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status_code: u16,
    /// Canonical reason phrase of the status
    pub message: String,
    pub details: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, details: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            message: status.canonical_reason().unwrap_or_default().to_string(),
            details: details.into(),
        }
    }
}

/// Map a use case error context to the HTTP status returned to the client
pub fn error_context_to_status_code(context: UseCaseErrorContext) -> StatusCode {
    match context {
        UseCaseErrorContext::ParseError => StatusCode::BAD_REQUEST,
        UseCaseErrorContext::NotFound => StatusCode::NOT_FOUND,
        UseCaseErrorContext::Conflict => StatusCode::CONFLICT,
        UseCaseErrorContext::InvalidInput => StatusCode::UNPROCESSABLE_ENTITY,
        UseCaseErrorContext::Database | UseCaseErrorContext::Unexpected => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let chain = report(&self);

        if status.is_server_error() {
            error!(status = status.as_u16(), error = %chain, "Request failed");
        } else {
            warn!(status = status.as_u16(), error = %chain, "Request rejected");
        }

        let body = ErrorResponse::new(status, self.details());
        (status, Json(body)).into_response()
    }
}
