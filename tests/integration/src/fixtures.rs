//! Test fixtures and data generators

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Create user request body
#[derive(Debug, Serialize)]
pub struct CreateUserRequest {
    pub name: String,
}

impl CreateUserRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn unique() -> Self {
        Self::new(format!("test-user-{}", unique_suffix()))
    }
}

/// Error response body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub message: String,
    pub details: String,
}
