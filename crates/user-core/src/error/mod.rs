//! Domain errors - the lower layers of the error chain
//!
//! Every layer of the application owns exactly one error type. Each one wraps
//! the error it received from the layer below and exposes it through
//! [`std::error::Error::source`], so the whole chain stays available for
//! logging while `Display` only renders the layer's own message.

mod model_error;
mod not_found;
mod repository_error;

use std::error::Error;

pub use model_error::ModelError;
pub use not_found::NotFoundError;
pub use repository_error::RepositoryError;

/// Boxed error used as the inner cause of every layered error
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Render an error and all of its causes, joined by `": "`
///
/// ```
/// use user_core::{report, ModelError};
///
/// let err = ModelError::new("Name is required");
/// assert_eq!(report(&err), "ModelError: Name is required");
/// ```
pub fn report(err: &(dyn Error + 'static)) -> String {
    let mut out = err.to_string();
    let mut current = err.source();
    while let Some(cause) = current {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        current = cause.source();
    }
    out
}
