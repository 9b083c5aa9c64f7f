//! Middleware stack for the API server
//!
//! Request ID generation and propagation, request tracing, and a global
//! request timeout rendered as a JSON error body.

use std::time::Duration;

use axum::{
    body::Body,
    error_handling::HandleErrorLayer,
    http::{header, Request, StatusCode},
    response::{IntoResponse, Response},
    BoxError, Json, Router,
};
use tower::{timeout::error::Elapsed, timeout::TimeoutLayer, ServiceBuilder};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, warn, Level};

use crate::response::ErrorResponse;
use crate::state::AppState;

/// Header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Requests running longer than this get a 503
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Apply middleware stack to the router
pub fn apply_middleware(router: Router<AppState>) -> Router<AppState> {
    apply_middleware_with_timeout(router, REQUEST_TIMEOUT)
}

/// Same stack as [`apply_middleware`] with a custom request timeout
pub fn apply_middleware_with_timeout<S>(router: Router<S>, timeout: Duration) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(
        ServiceBuilder::new()
            // Request ID
            .layer(SetRequestIdLayer::new(
                header::HeaderName::from_static(REQUEST_ID_HEADER),
                MakeRequestUuid,
            ))
            .layer(PropagateRequestIdLayer::new(header::HeaderName::from_static(
                REQUEST_ID_HEADER,
            )))
            // Tracing
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(|request: &Request<Body>| {
                        let request_id = request
                            .headers()
                            .get(REQUEST_ID_HEADER)
                            .and_then(|v| v.to_str().ok())
                            .unwrap_or("unknown");

                        tracing::info_span!(
                            "http_request",
                            method = %request.method(),
                            uri = %request.uri(),
                            request_id = %request_id,
                        )
                    })
                    .on_request(DefaultOnRequest::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            )
            // Timeout errors become responses here
            .layer(HandleErrorLayer::new(handle_middleware_error))
            .layer(TimeoutLayer::new(timeout)),
    )
}

/// Render errors raised by fallible layers in the same body shape as handler errors
async fn handle_middleware_error(err: BoxError) -> Response {
    let (status, details) = if err.is::<Elapsed>() {
        warn!("Request timed out");
        (StatusCode::SERVICE_UNAVAILABLE, "Request timed out".to_string())
    } else {
        error!(error = %err, "Middleware failed");
        (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
    };

    (status, Json(ErrorResponse::new(status, details))).into_response()
}
