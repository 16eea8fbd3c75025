//! SQLite implementation of the event log.

use std::path::Path;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::domain::{Event, NewEvent};
use crate::error::AppError;

const CREATE_EVENTS_TABLE: &str = "CREATE TABLE IF NOT EXISTS events (\
     id INTEGER PRIMARY KEY AUTOINCREMENT, \
     ts TEXT NOT NULL, \
     message TEXT NOT NULL\
     )";

/// SQLite-backed event log using `sqlx::SqlitePool`.
///
/// Every method issues a single autocommitted statement, so a read sees
/// every insert committed before it started and nothing after.
#[derive(Debug, Clone)]
pub struct SqliteEventStore {
    pool: SqlitePool,
}

impl SqliteEventStore {
    /// Wraps an existing pool. The caller is responsible for the schema;
    /// see [`SqliteEventStore::ensure_schema`].
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens (creating if needed) the database file at `path` and ensures
    /// the schema exists.
    ///
    /// The parent directory is created first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Io`] if the directory cannot be created and
    /// [`AppError::Storage`] if the database cannot be opened or the
    /// schema statement fails.
    pub async fn open(path: &Path, max_connections: u32) -> Result<Self, AppError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await?;

        let store = Self::new(pool);
        store.ensure_schema().await?;
        tracing::info!(path = %path.display(), "event store ready");
        Ok(store)
    }

    /// Creates the `events` table if it does not exist. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database failure.
    pub async fn ensure_schema(&self) -> Result<(), AppError> {
        sqlx::query(CREATE_EVENTS_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    /// Appends an event and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database failure.
    pub async fn insert(&self, event: NewEvent) -> Result<Event, AppError> {
        let result = sqlx::query("INSERT INTO events (ts, message) VALUES (?, ?)")
            .bind(&event.timestamp)
            .bind(&event.message)
            .execute(&self.pool)
            .await?;

        Ok(event.with_id(result.last_insert_rowid()))
    }

    /// Loads the `limit` most recent events, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database failure.
    pub async fn recent(&self, limit: u32) -> Result<Vec<Event>, AppError> {
        let rows = sqlx::query_as::<_, (i64, String, String)>(
            "SELECT id, ts, message FROM events ORDER BY id DESC LIMIT ?",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, timestamp, message)| Event {
                id,
                timestamp,
                message,
            })
            .collect())
    }

    /// Counts all stored events.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database failure.
    pub async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM events")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
