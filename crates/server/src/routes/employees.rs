use axum::{extract::{rejection::JsonRejection, State}, http::StatusCode, Json};
use serde::Deserialize;
use service::employee_service;
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

#[derive(Debug, Deserialize)]
pub struct EmpRequest {
    #[serde(default = "default_name")]
    pub name: String,
}

fn default_name() -> String { "Employee Name".into() }

#[utoipa::path(
    post, path = "/emp", tag = "employee",
    request_body = crate::openapi::EmpRequestDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<EmpRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<models::employee::Model>), JsonApiError> {
    let Json(input) = payload?;
    models::employee::validate_name(&input.name)?;
    let created = employee_service::create_employee(&state.db, &input.name).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/emp", tag = "employee",
    responses(
        (status = 200, description = "List OK"),
        (status = 404, description = "No employees found.")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<models::employee::Model>>, JsonApiError> {
    let list = employee_service::list_employees(&state.db).await?;
    info!(count = list.len(), "list employees");
    Ok(Json(list))
}
