use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use tracing::{info, instrument, warn};

use models::car;
use crate::errors::{non_empty, ServiceError};

/// Create an unowned car. A duplicate plate is reported by the store as `Conflict`.
#[instrument(skip(db))]
pub async fn create_car(
    db: &DatabaseConnection,
    make: &str,
    model: &str,
    color: &str,
    number_plate: &str,
) -> Result<car::Model, ServiceError> {
    let created = car::create(db, make, model, color, number_plate)
        .await
        .map_err(ServiceError::from)
        .inspect_err(|e| warn!(err = %e, "create car failed"))?;
    info!(id = created.id, number_plate = %created.number_plate, "created car");
    Ok(created)
}

#[instrument(skip(db))]
pub async fn list_cars(db: &DatabaseConnection) -> Result<Vec<car::Model>, ServiceError> {
    let rows = car::Entity::find().order_by_asc(car::Column::Id).all(db).await?;
    non_empty(rows, "cars")
}

/// Exact, case-sensitive match on `make`.
#[instrument(skip(db))]
pub async fn list_cars_by_make(db: &DatabaseConnection, make: &str) -> Result<Vec<car::Model>, ServiceError> {
    non_empty(car::list_by_make(db, make).await?, "cars")
}

pub async fn get_car(db: &DatabaseConnection, id: i32) -> Result<Option<car::Model>, ServiceError> {
    Ok(car::find(db, id).await?)
}

pub async fn find_car_by_plate(db: &DatabaseConnection, number_plate: &str) -> Result<Option<car::Model>, ServiceError> {
    Ok(car::find_by_plate(db, number_plate).await?)
}

/// Overwrite make, model and color. The number plate and owner are left as they are.
#[instrument(skip(db))]
pub async fn update_car(
    db: &DatabaseConnection,
    id: i32,
    make: &str,
    model: &str,
    color: &str,
) -> Result<car::Model, ServiceError> {
    car::validate_make(make)?;
    car::validate_model(model)?;
    car::validate_color(color)?;

    let mut am: car::ActiveModel = car::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("Car"))?
        .into();
    am.make = Set(make.to_string());
    am.model = Set(model.to_string());
    am.color = Set(color.to_string());
    let updated = am.update(db).await?;
    info!(id, "updated car");
    Ok(updated)
}

/// Permanently remove a car. The owning employee is untouched.
#[instrument(skip(db))]
pub async fn delete_car(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let res = car::Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("Car"));
    }
    info!(id, "deleted car");
    Ok(())
}
