// Repository ports shared by the SQLite and in-memory stores

use crate::models::{state::StateRecord, user::UserRecord};
use async_trait::async_trait;
use thiserror::Error;

/// Failure raised by a store. Callers receive it exactly as the store produced it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("storage unavailable: {0}")]
    Connection(String),

    #[error("storage query failed: {0}")]
    Query(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => RepositoryError::Connection(err.to_string()),
            _ => RepositoryError::Query(err.to_string()),
        }
    }
}

/// Access to the `state` lookup table.
#[async_trait]
pub trait StateRepository: Send + Sync {
    /// Every row in the table, in whatever order storage yields them.
    async fn find_all(&self) -> Result<Vec<StateRecord>, RepositoryError>;

    async fn insert(&self, name: &str) -> Result<StateRecord, RepositoryError>;

    /// Cheap liveness probe used by the health endpoint.
    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}

/// Read access to user records owned by the user subsystem.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<UserRecord>, RepositoryError>;

    async fn insert(&self, type_user: Option<i64>) -> Result<UserRecord, RepositoryError>;
}
