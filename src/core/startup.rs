use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use crate::core::config::Config;
use crate::core::db::{connect_pool, run_migrations};
use crate::core::state::AppState;
use crate::stores::memory::{MemoryStateRepository, MemoryUserRepository};
use crate::stores::repository::StateRepository;
use crate::stores::sqlite::{SqliteStateRepository, SqliteUserRepository};

/// Wire the configured storage backend into a fresh `AppState`
pub async fn build_state(config: Config) -> Result<AppState> {
    let state = match config.database.backend.as_str() {
        "memory" => {
            info!("Using in-memory storage");
            AppState::new(
                config,
                Arc::new(MemoryStateRepository::new()),
                Arc::new(MemoryUserRepository::new()),
            )
        }
        _ => {
            let pool = connect_pool(&config.database)
                .await
                .context("Failed to open database")?;
            run_migrations(&pool)
                .await
                .context("Failed to run migrations")?;

            info!(
                url = %config.database.url,
                max_connections = config.database.max_connections,
                "SQLite storage ready"
            );

            AppState::new(
                config,
                Arc::new(SqliteStateRepository::new(pool.clone())),
                Arc::new(SqliteUserRepository::new(pool)),
            )
        }
    };

    seed_states(state.state_repository.as_ref(), &state.config.seed.states).await?;

    Ok(state)
}

/// Insert the configured state names, but only into an empty table.
/// Returns the number of rows written.
pub async fn seed_states(repository: &dyn StateRepository, names: &[String]) -> Result<usize> {
    if names.is_empty() {
        return Ok(0);
    }

    let existing = repository
        .find_all()
        .await
        .context("Failed to read state table before seeding")?;
    if !existing.is_empty() {
        info!(existing = existing.len(), "State table already populated, skipping seed");
        return Ok(0);
    }

    for name in names {
        repository
            .insert(name)
            .await
            .with_context(|| format!("Failed to seed state '{}'", name))?;
    }

    info!(seeded = names.len(), "State table seeded");
    Ok(names.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::test_config;
    use tempfile::TempDir;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_seed_into_empty_table() {
        let repo = MemoryStateRepository::new();

        let seeded = seed_states(&repo, &names(&["Acre", "Bahia"])).await.unwrap();
        assert_eq!(seeded, 2);
        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn test_seed_skips_populated_table() {
        let repo = MemoryStateRepository::new();
        repo.insert("Goias").await.unwrap();

        let seeded = seed_states(&repo, &names(&["Acre"])).await.unwrap();
        assert_eq!(seeded, 0);
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_build_state_with_sqlite_seeds_once() {
        let dir = TempDir::new().unwrap();
        let mut config = test_config();
        config.database.url = dir.path().join("state.db").to_string_lossy().into_owned();
        config.seed.states = names(&["Acre", "Bahia", "Ceara"]);

        let state = build_state(config.clone()).await.unwrap();
        assert_eq!(state.state_service.get_all_state().await.unwrap().len(), 3);

        // Reopening the same file must not duplicate the seed rows.
        let state = build_state(config).await.unwrap();
        assert_eq!(state.state_service.get_all_state().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_build_state_with_memory_backend() {
        let mut config = test_config();
        config.database.backend = "memory".to_string();

        let state = build_state(config).await.unwrap();
        assert!(state.state_service.get_all_state().await.unwrap().is_empty());
    }
}
