//! Service layer: business logic orchestration.
//!
//! [`EventService`] coordinates the event store and the backup monitor.
//! Handlers only translate between HTTP and this API.

pub mod event_service;

pub use event_service::{EventService, ServiceStatus};
