//! Domain layer: event records and backup freshness.
//!
//! Holds the types every other layer speaks in: the persisted [`Event`],
//! the [`NewEvent`] about to be written, and the [`BackupMonitor`] that
//! reports on the externally produced backup files.

pub mod backup;
pub mod event;

pub use backup::{BackupMonitor, BackupStatus};
pub use event::{Event, NewEvent};
