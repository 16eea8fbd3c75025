//! Event records and their UTC timestamp format.

use chrono::{DateTime, SecondsFormat, Utc};

/// Message stored when a write request does not carry one.
pub const DEFAULT_MESSAGE: &str = "hello";

/// A persisted event row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Store-assigned identifier, strictly increasing in insertion order.
    pub id: i64,
    /// ISO-8601 UTC timestamp with a trailing `Z`.
    pub timestamp: String,
    /// Free-text message. May be empty.
    pub message: String,
}

/// An event about to be inserted; the store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    /// ISO-8601 UTC timestamp with a trailing `Z`.
    pub timestamp: String,
    /// Free-text message.
    pub message: String,
}

impl NewEvent {
    /// Builds an event stamped at `at`.
    #[must_use]
    pub fn at(at: DateTime<Utc>, message: impl Into<String>) -> Self {
        Self {
            timestamp: format_timestamp(at),
            message: message.into(),
        }
    }

    /// Builds an event stamped with the current UTC time.
    #[must_use]
    pub fn now(message: impl Into<String>) -> Self {
        Self::at(Utc::now(), message)
    }

    /// Attaches the identifier assigned by the store.
    #[must_use]
    pub fn with_id(self, id: i64) -> Event {
        Event {
            id,
            timestamp: self.timestamp,
            message: self.message,
        }
    }
}

/// Formats `at` as `YYYY-MM-DDTHH:MM:SS.ffffffZ`.
#[must_use]
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}
