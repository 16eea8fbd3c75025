//! Persistence layer: SQLite event log.
//!
//! The concrete store uses `sqlx::SqlitePool` for async access to a
//! single-file database. The pool is opened once at startup, which is
//! also when the schema is ensured.

pub mod sqlite;

pub use sqlite::SqliteEventStore;
