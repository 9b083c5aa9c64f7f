//! User name - non-empty display name of a user

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValueObject;
use crate::error::ModelError;

/// Name of a user
///
/// The only rule is that the name is not empty. The input is kept as-is:
/// no trimming and no length limit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Validate and wrap a name
    pub fn parse(name: &str) -> Result<Self, ModelError> {
        if name.is_empty() {
            return Err(ModelError::new("Name is required"));
        }
        Ok(Self(name.to_owned()))
    }

    /// Borrow the name
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the inner string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl ValueObject for UserName {
    type Value = str;

    fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for UserName {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(ModelError::new("Name is required"));
        }
        Ok(Self(value))
    }
}

impl From<UserName> for String {
    fn from(name: UserName) -> Self {
        name.0
    }
}
