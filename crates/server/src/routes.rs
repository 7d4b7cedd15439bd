use axum::{
    routing::{get, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::state::ServerState;

pub mod cars;
pub mod employees;
pub mod registration;

#[utoipa::path(
    get, path = "/healthy", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health::healthy())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(crate::openapi::ApiDoc::openapi())
}

/// Build the application router. Trailing-slash variants are registered as aliases.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/healthy", get(health))
        .route("/healthy/", get(health))
        .route("/emp", get(employees::list).post(employees::create))
        .route("/emp/", get(employees::list).post(employees::create))
        .route("/car", get(cars::list).post(cars::create))
        .route("/car/", get(cars::list).post(cars::create))
        // static `register` segments take priority over `:key`
        .route("/car/register", get(registration::list))
        .route("/car/register/", get(registration::list))
        .route("/car/register/:number_plate", put(registration::register))
        .route(
            "/car/:key",
            get(cars::list_by_make).put(cars::update).delete(cars::delete),
        )
        .route("/api-docs/openapi.json", get(openapi_json))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
