//! # eventlog
//!
//! Minimal event-logging REST service backed by SQLite.
//!
//! Requests record timestamped text messages; read endpoints list the
//! most recent events, count them, and report how fresh the newest file
//! in an externally maintained backup directory is.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP GET)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── EventService (service/)
//!     │
//!     ├── BackupMonitor (domain/) ── backup directory listing
//!     │
//!     └── SQLite Persistence (persistence/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
