//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{User, UserCommand};
use crate::error::RepositoryError;
use crate::value_objects::UserId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepositoryError>;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert the user, or update name/updated_at if the id already exists
    ///
    /// No validation happens here; the command is trusted to be valid.
    async fn create_user(&self, cmd: &UserCommand) -> RepoResult<()>;

    /// Find a user by ID
    ///
    /// A missing row is reported as an error like any other failure.
    async fn get_user(&self, id: UserId) -> RepoResult<User>;

    /// Find every user whose ID is in `ids`; unknown IDs are skipped
    async fn get_users(&self, ids: &[UserId]) -> RepoResult<Vec<User>>;
}
