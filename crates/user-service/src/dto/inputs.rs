//! Use case inputs

use serde::Deserialize;

use user_core::value_objects::UserId;

/// Input for creating a user
///
/// The name is validated by the domain service, not here.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserInput {
    pub name: String,
}

impl CreateUserInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Input for fetching a user by ID
#[derive(Debug, Clone, Copy)]
pub struct GetUserInput {
    pub id: UserId,
}

impl GetUserInput {
    pub fn new(id: UserId) -> Self {
        Self { id }
    }
}
