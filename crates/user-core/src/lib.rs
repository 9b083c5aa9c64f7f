//! # user-core
//!
//! Domain layer containing value objects, command/query models, the lower
//! layers of the error chain, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{User, UserCommand};
pub use error::{report, BoxError, ModelError, NotFoundError, RepositoryError};
pub use traits::{RepoResult, UserRepository};
pub use value_objects::{UserId, UserName, ValueObject};
