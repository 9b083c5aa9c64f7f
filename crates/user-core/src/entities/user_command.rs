//! User command - write-side aggregate

use chrono::{DateTime, Utc};

use crate::error::ModelError;
use crate::value_objects::{UserId, UserName};

/// Validated user ready to be persisted
///
/// Fields are private, so the only way to get one is through [`UserCommand::create`]
/// or [`UserCommand::from_parts`], both of which take validated value objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCommand {
    id: UserId,
    name: UserName,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserCommand {
    /// Build a command for a brand new user
    ///
    /// Generates a fresh id and stamps both timestamps with the current time.
    pub fn create(name: &str) -> Result<Self, ModelError> {
        let name = UserName::parse(name)?;
        let now = Utc::now();
        Ok(Self {
            id: UserId::new(),
            name,
            created_at: now,
            updated_at: now,
        })
    }

    /// Assemble a command from already-validated parts
    pub fn from_parts(
        id: UserId,
        name: UserName,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            created_at,
            updated_at,
        }
    }

    #[inline]
    pub fn id(&self) -> UserId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &UserName {
        &self.name
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[inline]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
