use models::errors::ModelError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    /// Single missing entity, e.g. `not_found("Car")` -> "Car not found."
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{entity} not found.")) }

    /// Empty collection, e.g. `none_found("cars")` -> "No cars found."
    pub fn none_found(collection: &str) -> Self { Self::NotFound(format!("No {collection} found.")) }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => Self::Validation(msg),
            ModelError::Conflict(msg) => Self::Conflict(msg),
            ModelError::Db(msg) => Self::Db(msg),
        }
    }
}

impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self { ModelError::from(e).into() }
}

/// Lists never come back empty: zero rows is reported as not found.
pub(crate) fn non_empty<T>(rows: Vec<T>, collection: &str) -> Result<Vec<T>, ServiceError> {
    if rows.is_empty() {
        return Err(ServiceError::none_found(collection));
    }
    Ok(rows)
}
