//! Integration test utilities for the user service
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API backed by a real PostgreSQL database.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
