//! Schema migrations

use std::path::Path;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::PgPool;
use tracing::info;

/// Migrations shipped with this crate
pub const DEFAULT_MIGRATIONS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/migrations");

/// Apply every pending migration found in `dir`
pub async fn run_migrations(pool: &PgPool, dir: impl AsRef<Path>) -> Result<(), MigrateError> {
    let dir = dir.as_ref();
    let migrator = Migrator::new(dir).await?;
    info!(path = %dir.display(), count = migrator.iter().count(), "Running migrations");
    migrator.run(pool).await
}
