use crate::models::{state::StateRecord, user::UserRecord};
use crate::stores::repository::{RepositoryError, StateRepository, UserRepository};
use crate::utils::time::current_timestamp;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// In-memory state table
///
/// Iteration order of the underlying map is unspecified, which matches the
/// storage-defined ordering of the SQL store.
pub struct MemoryStateRepository {
    states: DashMap<i64, Arc<StateRecord>>,
    next_id: AtomicI64,
}

impl MemoryStateRepository {
    pub fn new() -> Self {
        Self {
            states: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Insert a fully formed row, replacing any row with the same id
    pub fn put(&self, state: StateRecord) {
        self.next_id.fetch_max(state.id.saturating_add(1), Ordering::Relaxed);
        self.states.insert(state.id, Arc::new(state));
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl Default for MemoryStateRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StateRepository for MemoryStateRepository {
    async fn find_all(&self) -> Result<Vec<StateRecord>, RepositoryError> {
        Ok(self
            .states
            .iter()
            .map(|entry| entry.value().as_ref().clone())
            .collect())
    }

    async fn insert(&self, name: &str) -> Result<StateRecord, RepositoryError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let state = StateRecord::new(id, name, current_timestamp());
        self.states.insert(id, Arc::new(state.clone()));
        Ok(state)
    }
}

/// In-memory user table keyed by user id
pub struct MemoryUserRepository {
    users: DashMap<i64, Arc<UserRecord>>,
    next_id: AtomicI64,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Store a record under `id`. The record itself is kept untouched, so it
    /// may carry a different (or no) `id` field.
    pub fn put(&self, id: i64, user: UserRecord) {
        self.next_id.fetch_max(id.saturating_add(1), Ordering::Relaxed);
        self.users.insert(id, Arc::new(user));
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for MemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<UserRecord>, RepositoryError> {
        Ok(self.users.get(&id).map(|entry| entry.value().as_ref().clone()))
    }

    async fn insert(&self, type_user: Option<i64>) -> Result<UserRecord, RepositoryError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let user = UserRecord {
            id: Some(id),
            type_user,
        };
        self.users.insert(id, Arc::new(user.clone()));
        Ok(user)
    }
}
