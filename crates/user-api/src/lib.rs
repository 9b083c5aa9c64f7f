//! # user-api
//!
//! REST API server built with Axum framework.
//!
//! Handlers decode the request, call a use case through the
//! [`UseCaseFacade`](user_service::UseCaseFacade) and turn failures into
//! [`HandlerError`]s. The status code is chosen in one place only, when the
//! error is rendered as a response.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{convert_usecase_error_to_handler_error, HandlerError, HandlerErrorContext};
pub use response::{error_context_to_status_code, ErrorResponse};
pub use server::{create_app, create_app_state, run, run_server, trim_trailing_slash};
pub use state::AppState;
