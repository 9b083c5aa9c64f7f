//! User handlers

use axum::{extract::State, http::StatusCode, Json};
use user_core::entities::User;
use user_service::{CreateUserInput, GetUserInput};

use crate::error::HandlerError;
use crate::extractors::{BindJson, UserIdPath};
use crate::state::AppState;

/// Create a user
///
/// POST /api/v1/private/users
pub async fn create_user(
    State(state): State<AppState>,
    BindJson(input): BindJson<CreateUserInput>,
) -> Result<StatusCode, HandlerError> {
    state
        .usecases()
        .user()
        .create_user(input)
        .await
        .map_err(HandlerError::use_case)?;

    Ok(StatusCode::CREATED)
}

/// Get user by ID
///
/// GET /api/v1/private/users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    UserIdPath(id): UserIdPath,
) -> Result<Json<User>, HandlerError> {
    let output = state
        .usecases()
        .user()
        .get_user(GetUserInput::new(id))
        .await
        .map_err(HandlerError::use_case)?;

    Ok(Json(output.user))
}
