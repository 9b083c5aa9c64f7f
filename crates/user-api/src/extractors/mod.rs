//! Axum extractors for request handling
//!
//! Both extractors reject with a parse `HandlerError`, so a malformed
//! request never reaches a use case.

mod json;
mod path;

pub use json::BindJson;
pub use path::UserIdPath;
