use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use tracing::{info, instrument};

use models::employee;
use crate::errors::{non_empty, ServiceError};

/// Create an employee. Duplicate names are allowed.
#[instrument(skip(db))]
pub async fn create_employee(db: &DatabaseConnection, name: &str) -> Result<employee::Model, ServiceError> {
    let created = employee::create(db, name).await?;
    info!(id = created.id, "created employee");
    Ok(created)
}

/// All employees by id; an empty table is `NotFound("No employees found.")`.
#[instrument(skip(db))]
pub async fn list_employees(db: &DatabaseConnection) -> Result<Vec<employee::Model>, ServiceError> {
    let rows = employee::Entity::find()
        .order_by_asc(employee::Column::Id)
        .all(db)
        .await?;
    non_empty(rows, "employees")
}

pub async fn get_employee(db: &DatabaseConnection, id: i32) -> Result<Option<employee::Model>, ServiceError> {
    Ok(employee::find(db, id).await?)
}
