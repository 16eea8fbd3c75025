//! Event service: records events and reports on the store and backups.

use crate::domain::event::DEFAULT_MESSAGE;
use crate::domain::{BackupMonitor, BackupStatus, Event, NewEvent};
use crate::error::AppError;
use crate::persistence::SqliteEventStore;

/// Combined view returned by the status endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceStatus {
    /// Total number of stored events.
    pub count: i64,
    /// Newest backup, if any.
    pub backup: BackupStatus,
}

/// Orchestration layer for all event operations.
///
/// Stateless coordinator: owns the [`SqliteEventStore`] handle and the
/// [`BackupMonitor`]. Each method performs one store operation.
#[derive(Debug, Clone)]
pub struct EventService {
    store: SqliteEventStore,
    backups: BackupMonitor,
    recent_limit: u32,
}

impl EventService {
    /// Creates a new `EventService` listing at most `recent_limit` events.
    #[must_use]
    pub fn new(store: SqliteEventStore, backups: BackupMonitor, recent_limit: u32) -> Self {
        Self {
            store,
            backups,
            recent_limit,
        }
    }

    /// Records an event stamped with the current UTC time.
    ///
    /// `None` stores the default message; any string, empty included,
    /// is stored as given.
    ///
    /// # Errors
    ///
    /// Returns an [`AppError`] if the insert fails.
    pub async fn record(&self, message: Option<String>) -> Result<Event, AppError> {
        let message = message.unwrap_or_else(|| DEFAULT_MESSAGE.to_string());
        let event = self.store.insert(NewEvent::now(message)).await?;
        tracing::info!(id = event.id, "event recorded");
        Ok(event)
    }

    /// Returns the most recent events, newest first.
    ///
    /// # Errors
    ///
    /// Returns an [`AppError`] on storage failure.
    pub async fn recent(&self) -> Result<Vec<Event>, AppError> {
        self.store.recent(self.recent_limit).await
    }

    /// Returns the total number of stored events.
    ///
    /// # Errors
    ///
    /// Returns an [`AppError`] on storage failure.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.store.count().await
    }

    /// Returns the event count together with backup freshness.
    ///
    /// The two are read independently; a missing backup is not an error.
    ///
    /// # Errors
    ///
    /// Returns an [`AppError`] if counting fails.
    pub async fn status(&self) -> Result<ServiceStatus, AppError> {
        let count = self.store.count().await?;
        let backup = self.backups.latest().await;
        Ok(ServiceStatus { count, backup })
    }
}
