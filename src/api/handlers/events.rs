//! Event handlers: add, consultation, count.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{AddEventParams, AddEventResponse, CountResponse, EventDto};
use crate::app_state::AppState;
use crate::error::{AppError, ErrorResponse};

/// `GET /add` — Record an event stamped with the current UTC time.
///
/// # Errors
///
/// Returns [`AppError::InvalidRequest`] if the query string cannot be read
/// as key/value pairs and [`AppError::Storage`] if the insert fails.
#[utoipa::path(
    get,
    path = "/add",
    tag = "Events",
    summary = "Record an event",
    description = "Stores one event with the given message (default `hello`) and the current UTC timestamp.",
    params(AddEventParams),
    responses(
        (status = 200, description = "Event stored", body = AddEventResponse),
        (status = 400, description = "Malformed query string", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn add_event(
    State(state): State<AppState>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(pairs) = pairs.map_err(|e| AppError::InvalidRequest(e.body_text()))?;
    let params = AddEventParams::from_pairs(pairs);
    let event = state.event_service.record(params.message).await?;
    Ok(Json(AddEventResponse::from(event)))
}

/// `GET /consultation` — List the most recent events, newest first.
///
/// # Errors
///
/// Returns [`AppError::Storage`] on database failure.
#[utoipa::path(
    get,
    path = "/consultation",
    tag = "Events",
    summary = "List recent events",
    description = "Returns at most 50 events ordered by descending identifier.",
    responses(
        (status = 200, description = "Recent events", body = Vec<EventDto>),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn list_events(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let events = state.event_service.recent().await?;
    let data: Vec<EventDto> = events.into_iter().map(EventDto::from).collect();
    Ok(Json(data))
}

/// `GET /count` — Total number of stored events.
///
/// # Errors
///
/// Returns [`AppError::Storage`] on database failure.
#[utoipa::path(
    get,
    path = "/count",
    tag = "Events",
    summary = "Count events",
    responses(
        (status = 200, description = "Event count", body = CountResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn count_events(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let count = state.event_service.count().await?;
    Ok(Json(CountResponse { count }))
}

/// Event routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/add", get(add_event))
        .route("/consultation", get(list_events))
        .route("/count", get(count_events))
}
