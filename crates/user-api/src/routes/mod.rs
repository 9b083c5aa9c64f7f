//! Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, users};
use crate::state::AppState;

/// Create the main router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        .nest("/api/v1/private", private_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health::health_check))
}

/// Internal API v1 routes
fn private_v1_routes() -> Router<AppState> {
    Router::new().merge(user_routes())
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(users::create_user))
        .route("/users/:user_id", get(users::get_user))
}
