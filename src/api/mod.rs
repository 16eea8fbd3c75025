//! REST API layer: route handlers, DTOs, OpenAPI and router composition.
//!
//! All endpoints are `GET` and mounted at the root.

pub mod dto;
pub mod handlers;
pub mod openapi;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::app_state::AppState;
use openapi::{ApiDoc, OPENAPI_JSON_PATH};

/// Builds the API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    Router::new().merge(handlers::routes())
}

/// Builds the complete application: endpoints, OpenAPI document, HTTP
/// tracing and CORS, bound to `state`.
pub fn build_app(state: AppState) -> Router {
    let router = build_router().merge(docs_router());

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

#[cfg(feature = "swagger-ui")]
fn docs_router() -> Router<AppState> {
    use utoipa_swagger_ui::SwaggerUi;

    Router::new().merge(SwaggerUi::new("/swagger-ui").url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
}

#[cfg(not(feature = "swagger-ui"))]
fn docs_router() -> Router<AppState> {
    use axum::Json;
    use axum::routing::get;

    Router::new().route(OPENAPI_JSON_PATH, get(|| async { Json(ApiDoc::openapi()) }))
}
