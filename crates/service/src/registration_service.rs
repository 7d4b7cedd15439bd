use sea_orm::{ActiveModelTrait, DatabaseConnection, Set, TransactionTrait};
use tracing::{info, instrument, warn};

use models::{car, employee};
use crate::errors::{non_empty, ServiceError};

/// Assign an existing car to an existing employee.
///
/// The car is looked up first, then the employee, so a request where both are
/// missing always reports the car. Both checks and the write share one
/// transaction; nothing is written unless both rows exist. Re-registering an
/// owned car overwrites its owner.
#[instrument(skip(db))]
pub async fn register_car_owner(
    db: &DatabaseConnection,
    number_plate: &str,
    owner_id: i32,
) -> Result<car::Model, ServiceError> {
    if owner_id <= 0 {
        return Err(ServiceError::Validation("owner_id must be a positive integer".into()));
    }

    let txn = db.begin().await?;

    let Some(found) = car::find_by_plate(&txn, number_plate).await? else {
        warn!(number_plate, "registration for unknown car");
        return Err(ServiceError::not_found("Car"));
    };
    if employee::find(&txn, owner_id).await?.is_none() {
        warn!(owner_id, "registration for unknown employee");
        return Err(ServiceError::not_found("Employee"));
    }

    let previous_owner = found.owner_id;
    let mut am: car::ActiveModel = found.into();
    am.owner_id = Set(Some(owner_id));
    let updated = am.update(&txn).await?;
    txn.commit().await?;

    info!(car_id = updated.id, owner_id, ?previous_owner, "registered car owner");
    Ok(updated)
}

/// Owned cars joined with the owner's name; `NotFound("No cars found.")` when none are owned.
#[instrument(skip(db))]
pub async fn list_registered_cars(db: &DatabaseConnection) -> Result<Vec<car::RegisteredCar>, ServiceError> {
    non_empty(car::list_registered(db).await?, "cars")
}
