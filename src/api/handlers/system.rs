//! System endpoints: greeting, health check, status.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::dto::StatusMessage;
use crate::app_state::AppState;
use crate::error::{AppError, ErrorResponse};

/// Greeting returned by `GET /`.
pub const GREETING: &str = "Bonjour tout le monde !";

/// Store and backup status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    /// Total number of stored events.
    pub count: i64,
    /// Base name of the newest backup, or `"Aucun backup"`.
    pub last_backup_file: String,
    /// Seconds since that backup was last modified, `0` without backup.
    pub backup_age_seconds: u64,
}

/// `GET /` — Greeting.
#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    summary = "Greeting",
    responses(
        (status = 200, description = "Service is up", body = StatusMessage),
    )
)]
pub async fn root_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(StatusMessage::new(GREETING)))
}

/// `GET /health` — Liveness probe.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    responses(
        (status = 200, description = "Service is healthy", body = StatusMessage),
    )
)]
pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(StatusMessage::new("ok")))
}

/// `GET /status` — Event count and backup freshness.
///
/// # Errors
///
/// Returns [`AppError::Storage`] if the count cannot be read. A missing
/// backup is reported with sentinel values, not as an error.
#[utoipa::path(
    get,
    path = "/status",
    tag = "System",
    summary = "Store and backup status",
    description = "Returns the event count and the name and age of the most recently modified `*.db` file in the backup directory.",
    responses(
        (status = 200, description = "Current status", body = StatusResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn status_handler(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let status = state.event_service.status().await?;
    Ok(Json(StatusResponse {
        count: status.count,
        last_backup_file: status.backup.file_name().to_string(),
        backup_age_seconds: status.backup.age_seconds(),
    }))
}

/// System routes mounted at the root level.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/status", get(status_handler))
}
