pub mod admin;
pub mod auth;
pub mod fallback;
pub mod health;
pub mod metrics;
pub mod states;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::core::config::{AuthConfig, Config, DatabaseConfig, LoggingConfig, SeedConfig, ServerConfig};
    use crate::core::db::{connect_pool, run_migrations};
    use crate::core::state::AppState;
    use crate::stores::memory::{MemoryStateRepository, MemoryUserRepository};
    use crate::stores::sqlite::{SqliteStateRepository, SqliteUserRepository};
    use sqlx::SqlitePool;
    use std::sync::Arc;
    use tempfile::TempDir;

    pub const TEST_API_KEY: &str = "test-api-key";

    pub fn test_config() -> Config {
        Config {
            server: ServerConfig {
                port: Some(8080),
                unix_socket: None,
                num_threads: 2,
            },
            database: DatabaseConfig::default(),
            auth: AuthConfig {
                api_key: TEST_API_KEY.to_string(),
            },
            logging: LoggingConfig::default(),
            seed: SeedConfig::default(),
        }
    }

    pub fn memory_state() -> Arc<AppState> {
        Arc::new(AppState::new(
            test_config(),
            Arc::new(MemoryStateRepository::new()),
            Arc::new(MemoryUserRepository::new()),
        ))
    }

    /// State over a fresh SQLite file. Keep the `TempDir` alive for the test's duration.
    pub async fn sqlite_state() -> (Arc<AppState>, SqlitePool, TempDir) {
        let dir = TempDir::new().unwrap();
        let mut config = test_config();
        config.database.url = dir.path().join("test.db").to_string_lossy().into_owned();

        let pool = connect_pool(&config.database).await.unwrap();
        run_migrations(&pool).await.unwrap();

        let state = AppState::new(
            config,
            Arc::new(SqliteStateRepository::new(pool.clone())),
            Arc::new(SqliteUserRepository::new(pool.clone())),
        );
        (Arc::new(state), pool, dir)
    }
}
