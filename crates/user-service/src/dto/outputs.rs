//! Use case outputs

use user_core::entities::User;

/// Output of a successful create
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreateUserOutput;

/// Output of a successful lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetUserOutput {
    pub user: User,
}
