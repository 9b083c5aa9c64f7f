//! # user-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides the PostgreSQL implementation of the repository trait
//! defined in `user-core`. It handles:
//!
//! - Connection pool management and migrations
//! - Database models with SQLx `FromRow` derives
//! - Command/query ↔ model mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use user_db::pool::{create_pool, DatabaseConfig};
//! use user_db::repositories::PgUserRepository;
//! use user_core::traits::UserRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::new("postgres://localhost/users").with_connections(10, 1);
//!     let pool = create_pool(&config).await?;
//!     let user_repo = PgUserRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::PgUserRepository;
