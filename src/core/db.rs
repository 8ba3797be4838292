// SQLite pool setup and schema bootstrap

use crate::core::config::DatabaseConfig;
use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use std::str::FromStr;

const MEMORY_URL: &str = "sqlite::memory:";

/// Open a pool for `config.url`, which is either a file path (optionally
/// prefixed with `sqlite://`) or `sqlite::memory:`.
pub async fn connect_pool(config: &DatabaseConfig) -> Result<SqlitePool> {
    if config.url == MEMORY_URL {
        // Every connection to :memory: is a separate database, so keep exactly one alive.
        let options = SqliteConnectOptions::from_str(MEMORY_URL)
            .context("parse in-memory sqlite url")?;
        return SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .context("connect to in-memory sqlite");
    }

    let path = Path::new(sqlite_file_path(&config.url));
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create parent dirs for {}", parent.display()))?;
        }
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
        .with_context(|| format!("connect to sqlite at {}", path.display()))
}

/// File path part of a sqlite url: `sqlite://x.db`, `sqlite:x.db` and `x.db` all name `x.db`
fn sqlite_file_path(url: &str) -> &str {
    url.strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))
        .unwrap_or(url)
}

/// Create the tables if they do not exist yet
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    let stmts = [
        r#"
        CREATE TABLE IF NOT EXISTS state (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            name       TEXT    NOT NULL,
            created_at INTEGER NOT NULL,
            updated_at INTEGER NOT NULL
        );"#,
        r#"
        CREATE TABLE IF NOT EXISTS "user" (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            type_user INTEGER
        );"#,
    ];

    for stmt in &stmts {
        sqlx::query(stmt)
            .execute(pool)
            .await
            .with_context(|| format!("apply migration: {}", stmt.trim().lines().next().unwrap_or_default()))?;
    }
    Ok(())
}
