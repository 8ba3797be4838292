use crate::models::{state::StateRecord, user::UserRecord};
use crate::stores::repository::{RepositoryError, StateRepository, UserRepository};
use crate::utils::time::current_timestamp;
use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

/// `state` table backed by SQLite
#[derive(Clone)]
pub struct SqliteStateRepository {
    pool: SqlitePool,
}

impl SqliteStateRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StateRepository for SqliteStateRepository {
    async fn find_all(&self) -> Result<Vec<StateRecord>, RepositoryError> {
        // No ORDER BY: row order is whatever SQLite returns.
        let rows = sqlx::query_as::<_, StateRecord>(
            "SELECT id, name, created_at, updated_at FROM state",
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(rows = rows.len(), "Fetched state table");
        Ok(rows)
    }

    async fn insert(&self, name: &str) -> Result<StateRecord, RepositoryError> {
        let now = current_timestamp();
        let result = sqlx::query("INSERT INTO state (name, created_at, updated_at) VALUES (?, ?, ?)")
            .bind(name)
            .bind(now)
            .bind(now)
            .execute(&self.pool)
            .await?;

        Ok(StateRecord::new(result.last_insert_rowid(), name, now))
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// `user` table backed by SQLite
#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<UserRecord>, RepositoryError> {
        let user = sqlx::query_as::<_, UserRecord>(r#"SELECT id, type_user FROM "user" WHERE id = ?"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn insert(&self, type_user: Option<i64>) -> Result<UserRecord, RepositoryError> {
        let result = sqlx::query(r#"INSERT INTO "user" (type_user) VALUES (?)"#)
            .bind(type_user)
            .execute(&self.pool)
            .await?;

        Ok(UserRecord {
            id: Some(result.last_insert_rowid()),
            type_user,
        })
    }
}
