//! JSON body extractor

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::{HandlerError, INVALID_INPUT};

/// JSON body extractor
///
/// Same as [`axum::Json`], except that every rejection (missing content
/// type, syntax error, wrong shape) becomes a parse [`HandlerError`].
#[derive(Debug, Clone)]
pub struct BindJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for BindJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = HandlerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| HandlerError::parse_error(e, INVALID_INPUT))?;

        Ok(BindJson(value))
    }
}
