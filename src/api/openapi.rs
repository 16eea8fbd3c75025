//! OpenAPI document describing every REST endpoint.

use utoipa::OpenApi;

use crate::api::dto::{AddEventResponse, CountResponse, EventDto, StatusMessage};
use crate::api::handlers::{events, system};
use crate::error::{ErrorBody, ErrorResponse};

/// Path of the generated OpenAPI JSON document.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// OpenAPI description of the service.
#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "eventlog", description = "Event logging service with backup freshness reporting"),
    paths(
        system::root_handler,
        system::health_handler,
        system::status_handler,
        events::add_event,
        events::list_events,
        events::count_events,
    ),
    components(schemas(
        StatusMessage,
        system::StatusResponse,
        AddEventResponse,
        EventDto,
        CountResponse,
        ErrorResponse,
        ErrorBody,
    )),
    tags(
        (name = "Events", description = "Record, list and count events"),
        (name = "System", description = "Liveness and backup status"),
    )
)]
pub struct ApiDoc;
