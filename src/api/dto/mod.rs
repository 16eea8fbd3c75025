//! Data Transfer Objects for REST request/response serialization.
//!
//! One explicit type per endpoint keeps field names, order and types
//! stable on the wire.

pub mod common_dto;
pub mod event_dto;

pub use common_dto::*;
pub use event_dto::*;
