use axum::{extract::{rejection::JsonRejection, Path, State}, http::StatusCode, Json};
use serde::Deserialize;
use service::registration_service;
use tracing::{info, warn};

use crate::{errors::JsonApiError, state::ServerState, validation::ensure_positive};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub number_plate: Option<String>,
    pub owner_id: i64,
}

#[utoipa::path(
    put, path = "/car/register/{number_plate}", tag = "registration",
    params(("number_plate" = String, Path, description = "Plate of the car to register")),
    request_body = crate::openapi::RegisterRequestDoc,
    responses(
        (status = 201, description = "Registered"),
        (status = 404, description = "Car not found. / Employee not found."),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn register(
    State(state): State<ServerState>,
    Path(number_plate): Path<String>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<models::car::Model>), JsonApiError> {
    let Json(input) = payload?;
    let owner_id = ensure_positive("owner_id", input.owner_id)?;
    if let Some(body_plate) = input.number_plate.as_deref().filter(|p| *p != number_plate) {
        warn!(path_plate = %number_plate, %body_plate, "body plate differs from path; using path");
    }
    let updated = registration_service::register_car_owner(&state.db, &number_plate, owner_id).await?;
    Ok((StatusCode::CREATED, Json(updated)))
}

#[utoipa::path(
    get, path = "/car/register/", tag = "registration",
    responses(
        (status = 200, description = "Owned cars with owner name"),
        (status = 404, description = "No cars found.")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<models::car::RegisteredCar>>, JsonApiError> {
    let list = registration_service::list_registered_cars(&state.db).await?;
    info!(count = list.len(), "list registered cars");
    Ok(Json(list))
}
