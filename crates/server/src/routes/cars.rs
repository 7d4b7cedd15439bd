use axum::{extract::{rejection::JsonRejection, Path, State}, http::StatusCode, Json};
use serde::Deserialize;
use service::car_service;
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState, validation::parse_positive_id};

/// Body for create and update. On update the plate is validated but not stored.
#[derive(Debug, Deserialize)]
pub struct CarRequest {
    #[serde(default = "default_make")]
    pub make: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default = "default_number_plate")]
    pub number_plate: String,
}

fn default_make() -> String { "Toyota".into() }
fn default_model() -> String { "Yaris".into() }
fn default_color() -> String { "White".into() }
fn default_number_plate() -> String { "AB01 DEF".into() }

impl CarRequest {
    fn validate(&self) -> Result<(), JsonApiError> {
        models::car::validate_fields(&self.make, &self.model, &self.color, &self.number_plate)?;
        Ok(())
    }
}

#[utoipa::path(
    post, path = "/car", tag = "car",
    request_body = crate::openapi::CarRequestDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 409, description = "Number plate already registered"),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CarRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<models::car::Model>), JsonApiError> {
    let Json(input) = payload?;
    input.validate()?;
    let created = car_service::create_car(&state.db, &input.make, &input.model, &input.color, &input.number_plate).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/car", tag = "car",
    responses(
        (status = 200, description = "List OK"),
        (status = 404, description = "No cars found.")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<models::car::Model>>, JsonApiError> {
    let list = car_service::list_cars(&state.db).await?;
    info!(count = list.len(), "list cars");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/car/{make}", tag = "car",
    params(("make" = String, Path, description = "Exact make to match")),
    responses(
        (status = 200, description = "List OK"),
        (status = 404, description = "No cars found.")
    )
)]
pub async fn list_by_make(
    State(state): State<ServerState>,
    Path(make): Path<String>,
) -> Result<Json<Vec<models::car::Model>>, JsonApiError> {
    let list = car_service::list_cars_by_make(&state.db, &make).await?;
    info!(%make, count = list.len(), "list cars by make");
    Ok(Json(list))
}

#[utoipa::path(
    put, path = "/car/{car_id}", tag = "car",
    params(("car_id" = i32, Path, description = "Car ID, positive")),
    request_body = crate::openapi::CarRequestDoc,
    responses(
        (status = 204, description = "Updated"),
        (status = 404, description = "Car not found."),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<CarRequest>, JsonRejection>,
) -> Result<StatusCode, JsonApiError> {
    let id = parse_positive_id("car_id", &raw_id)?;
    let Json(input) = payload?;
    input.validate()?;
    car_service::update_car(&state.db, id, &input.make, &input.model, &input.color).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/car/{car_id}", tag = "car",
    params(("car_id" = i32, Path, description = "Car ID, positive")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Car not found."),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(raw_id): Path<String>) -> Result<StatusCode, JsonApiError> {
    let id = parse_positive_id("car_id", &raw_id)?;
    car_service::delete_car(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
