//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use user_core::entities::{User, UserCommand};
use user_core::traits::{RepoResult, UserRepository};
use user_core::value_objects::UserId;

use crate::mappers::UserInsert;
use crate::models::UserModel;

use super::error::map_db_error;

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self, cmd), fields(user_id = %cmd.id()))]
    async fn create_user(&self, cmd: &UserCommand) -> RepoResult<()> {
        let row = UserInsert::new(cmd);

        sqlx::query(
            r"
            INSERT INTO users (id, name, created_at, updated_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE
            SET name = EXCLUDED.name, updated_at = EXCLUDED.updated_at
            ",
        )
        .bind(row.id)
        .bind(row.name)
        .bind(row.created_at)
        .bind(row.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_user(&self, id: UserId) -> RepoResult<User> {
        let model = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, name, created_at, updated_at
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(User::from(model))
    }

    #[instrument(skip(self), fields(count = ids.len()))]
    async fn get_users(&self, ids: &[UserId]) -> RepoResult<Vec<User>> {
        let ids: Vec<Uuid> = ids.iter().map(|id| id.into_inner()).collect();

        let models = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, name, created_at, updated_at
            FROM users
            WHERE id = ANY($1)
            ",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(User::from).collect())
    }
}
