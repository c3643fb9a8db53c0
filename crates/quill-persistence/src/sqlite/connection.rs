//! SQLite Connection Management
//!
//! Wraps a `sqlx::SqlitePool` so repositories can share one pool cheaply.
//!
//! ## Usage
//!
//! ```ignore
//! use quill_persistence::sqlite::SqliteConnection;
//!
//! // File-backed (production)
//! let conn = SqliteConnection::connect("sqlite://quill.db", 5).await?;
//!
//! // Private in-memory database (tests)
//! let conn = SqliteConnection::in_memory().await?;
//!
//! conn.migrate().await?;
//! ```

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

use crate::error::PersistenceError;

/// Schema for the single `Blog` table
const CREATE_BLOG_TABLE: &str = "CREATE TABLE IF NOT EXISTS Blog (
    Id INTEGER PRIMARY KEY AUTOINCREMENT,
    Name TEXT NOT NULL,
    Description TEXT NOT NULL,
    Author TEXT NOT NULL
)";

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Shared SQLite connection pool
///
/// Cloning is cheap; every clone uses the same underlying pool.
#[derive(Debug, Clone)]
pub struct SqliteConnection {
    pool: SqlitePool,
}

impl SqliteConnection {
    /// Open a pool for `url`, creating the database file if it is missing
    ///
    /// An in-memory database lives as long as its connection, so for
    /// `:memory:` URLs the pool holds exactly one connection that is never
    /// recycled, whatever `max_connections` says.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, PersistenceError> {
        info!("Connecting to SQLite at {}", url);

        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| PersistenceError::InvalidConnectionString(e.to_string()))?
            .create_if_missing(true);

        let pool_options = if is_in_memory(url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections)
        };

        let pool = pool_options.connect_with(options).await?;
        Ok(Self { pool })
    }

    /// Private in-memory database
    pub async fn in_memory() -> Result<Self, PersistenceError> {
        Self::connect("sqlite::memory:", 1).await
    }

    /// Create the `Blog` table if it does not exist
    pub async fn migrate(&self) -> Result<(), PersistenceError> {
        sqlx::query(CREATE_BLOG_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| PersistenceError::Migration(e.to_string()))?;

        debug!("Blog schema is up to date");
        Ok(())
    }

    /// Underlying pool, for passing to `sqlx` functions
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }

    /// Close the pool and wait for connections to be returned
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
