use crate::models::state::StateRecord;
use crate::stores::repository::{RepositoryError, StateRepository};
use std::sync::Arc;

/// Read access to the `state` lookup table.
///
/// The repository is handed in at construction time. Each call goes straight
/// to storage: one `find_all` per call, with no caching, retry or paging, and
/// any storage error is returned to the caller as is.
#[derive(Clone)]
pub struct StateService {
    repository: Arc<dyn StateRepository>,
}

impl StateService {
    pub fn new(repository: Arc<dyn StateRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_all_state(&self) -> Result<Vec<StateRecord>, RepositoryError> {
        self.repository.find_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::memory::MemoryStateRepository;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Repository that records how often it is asked and can be told to fail
    #[derive(Default)]
    struct CountingRepository {
        rows: Mutex<Vec<StateRecord>>,
        failure: Mutex<Option<RepositoryError>>,
        calls: AtomicUsize,
    }

    impl CountingRepository {
        fn failing(err: RepositoryError) -> Self {
            Self {
                failure: Mutex::new(Some(err)),
                ..Self::default()
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl StateRepository for CountingRepository {
        async fn find_all(&self) -> Result<Vec<StateRecord>, RepositoryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(err) = self.failure.lock().unwrap().clone() {
                return Err(err);
            }
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn insert(&self, name: &str) -> Result<StateRecord, RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let state = StateRecord::new(rows.len() as i64 + 1, name, 0);
            rows.push(state.clone());
            Ok(state)
        }
    }

    #[tokio::test]
    async fn test_empty_table_gives_empty_list() {
        let service = StateService::new(Arc::new(MemoryStateRepository::new()));
        assert!(service.get_all_state().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_returns_all_rows_without_loss_or_duplication() {
        let repo = Arc::new(MemoryStateRepository::new());
        for i in 0..27 {
            repo.insert(&format!("state-{i}")).await.unwrap();
        }
        let service = StateService::new(repo);

        let mut ids: Vec<i64> = service.get_all_state().await.unwrap().iter().map(|s| s.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=27).collect::<Vec<i64>>());
    }

    #[tokio::test]
    async fn test_rows_are_returned_unmodified() {
        let repo = Arc::new(CountingRepository::default());
        let expected = vec![
            repo.insert("Acre").await.unwrap(),
            repo.insert("Bahia").await.unwrap(),
        ];
        let service = StateService::new(repo.clone());

        assert_eq!(service.get_all_state().await.unwrap(), expected);
    }

    #[tokio::test]
    async fn test_every_call_reads_storage() {
        let repo = Arc::new(CountingRepository::default());
        let service = StateService::new(repo.clone());

        service.get_all_state().await.unwrap();
        repo.insert("Ceara").await.unwrap();
        let second = service.get_all_state().await.unwrap();

        assert_eq!(repo.calls(), 2);
        assert_eq!(second.len(), 1);
    }

    #[tokio::test]
    async fn test_storage_failure_propagates_without_retry() {
        let failure = RepositoryError::Connection("database is locked".to_string());
        let repo = Arc::new(CountingRepository::failing(failure.clone()));
        let service = StateService::new(repo.clone());

        let err = service.get_all_state().await.unwrap_err();

        assert_eq!(err, failure);
        assert_eq!(repo.calls(), 1);
    }
}
