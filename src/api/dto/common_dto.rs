//! Shared DTO types used across multiple endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Single-field `{ "status": ... }` body returned by the liveness routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusMessage {
    /// Fixed status text.
    pub status: String,
}

impl StatusMessage {
    /// Builds a status body from a static string.
    #[must_use]
    pub fn new(status: &str) -> Self {
        Self {
            status: status.to_string(),
        }
    }
}
