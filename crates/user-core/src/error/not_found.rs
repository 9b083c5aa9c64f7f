//! "Not found" error formatting shared by every resource lookup

use std::error::Error;
use std::fmt;

use super::BoxError;

/// A resource could not be found by the given key
///
/// Renders as `User not found UserId("6f9c...")`: the resource name, the
/// short type name of the key, and the quoted key value.
#[derive(Debug)]
pub struct NotFoundError {
    resource: String,
    key_type: &'static str,
    key: String,
    inner: Option<BoxError>,
}

impl NotFoundError {
    /// Create a not-found error for `resource` looked up by `key`
    pub fn new<K>(resource: impl Into<String>, key: &K) -> Self
    where
        K: fmt::Display + ?Sized,
    {
        Self {
            resource: resource.into(),
            key_type: short_type_name::<K>(),
            key: key.to_string(),
            inner: None,
        }
    }

    /// Attach the error that caused the lookup to fail
    pub fn with_inner(mut self, inner: impl Into<BoxError>) -> Self {
        self.inner = Some(inner.into());
        self
    }

    /// Name of the missing resource
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// String form of the key that was looked up
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Last path segment of a type name (`user_core::UserId` -> `UserId`)
fn short_type_name<K: ?Sized>() -> &'static str {
    let full = std::any::type_name::<K>();
    full.rsplit("::").next().unwrap_or(full)
}

impl fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} not found {}({:?})",
            self.resource, self.key_type, self.key
        )
    }
}

impl Error for NotFoundError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.inner
            .as_deref()
            .map(|e| e as &(dyn Error + 'static))
    }
}
