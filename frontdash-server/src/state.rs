//! Application state for frontdash-server

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::str::FromStr;

use crate::config::Config;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub pool: SqlitePool,
}

impl AppState {
    /// Create a new AppState: open the pool and run migrations
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        // WAL, foreign keys, normal sync
        let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", config.database_path))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .pragma("foreign_keys", "ON");

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        // Wait up to 5s on write contention instead of failing immediately
        sqlx::query("PRAGMA busy_timeout = 5000;").execute(&pool).await?;

        tracing::info!("Database connection established (SQLite WAL, busy_timeout=5000ms)");

        sqlx::migrate!("./migrations")
            .set_ignore_missing(true)
            .run(&pool)
            .await?;
        tracing::info!("Database migrations applied");

        Ok(Self { pool })
    }
}
