//! Path parameter extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use user_core::value_objects::UserId;

use crate::error::{HandlerError, INVALID_INPUT};

/// A `UserId` taken from the single path parameter of the route
#[derive(Debug, Clone, Copy)]
pub struct UserIdPath(pub UserId);

#[async_trait]
impl<S> FromRequestParts<S> for UserIdPath
where
    S: Send + Sync,
{
    type Rejection = HandlerError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| HandlerError::parse_error(e, INVALID_INPUT))?;

        let id = UserId::parse(&raw).map_err(|e| HandlerError::parse_error(e, INVALID_INPUT))?;
        Ok(UserIdPath(id))
    }
}
