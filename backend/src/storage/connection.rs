use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

use crate::config::StorageSettings;
use crate::storage::error::StorageError;

/// DbConnection owns the SQLite pool and the bookmarks schema
#[derive(Clone)]
pub struct DbConnection {
    pool: SqlitePool,
}

impl DbConnection {
    /// Create a new database connection, creating the database file if needed
    pub async fn new(url: &str, max_connections: u32) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        // Idle connections are kept forever so an in-memory database survives
        // between requests.
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Self::setup_schema(&pool).await?;

        Ok(Self { pool })
    }

    /// Initialize the database described by the storage settings
    pub async fn init(settings: &StorageSettings) -> Result<Self, StorageError> {
        info!("Opening bookmarks database at {}", settings.database_url);
        Self::new(&settings.database_url, settings.max_connections).await
    }

    /// Initialize a private in-memory database for tests.
    ///
    /// A single pooled connection is used because every SQLite in-memory
    /// connection would otherwise see its own empty database.
    #[cfg(test)]
    pub async fn init_test() -> Result<Self, StorageError> {
        Self::new("sqlite::memory:", 1).await
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<(), StorageError> {
        // AUTOINCREMENT keeps SQLite from handing out the id of a deleted row again
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS bookmarks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL CHECK (length(title) > 0),
                description TEXT,
                url TEXT NOT NULL CHECK (length(url) > 0),
                rating INTEGER NOT NULL CHECK (rating BETWEEN 1 AND 5)
            );
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Get the underlying SQLite pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
