use sea_orm::{entity::prelude::*, ConnectionTrait, FromQueryResult, QueryOrder, QuerySelect, Set};
use serde::{Deserialize, Serialize};

use crate::employee;
use crate::errors::ModelError;

pub const MAKE_MIN_LEN: usize = 2;
pub const MODEL_MIN_LEN: usize = 1;
pub const COLOR_MIN_LEN: usize = 2;
pub const NUMBER_PLATE_LEN: usize = 8;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cars")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub make: String,
    pub model: String,
    pub color: String,
    #[sea_orm(unique)]
    pub number_plate: String,
    pub owner_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Owner,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Owner => Entity::belongs_to(employee::Entity)
                .from(Column::OwnerId)
                .to(employee::Column::Id)
                .into(),
        }
    }
}

impl Related<employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// A car joined with the employee that owns it.
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize, Deserialize)]
pub struct RegisteredCar {
    pub id: i32,
    pub make: String,
    pub model: String,
    pub color: String,
    pub number_plate: String,
    pub owner_id: i32,
    pub name: String,
}

fn min_len(field: &str, value: &str, min: usize) -> Result<(), ModelError> {
    if value.chars().count() < min {
        return Err(ModelError::Validation(format!("{field} must be at least {min} characters")));
    }
    Ok(())
}

pub fn validate_make(make: &str) -> Result<(), ModelError> { min_len("make", make, MAKE_MIN_LEN) }
pub fn validate_model(model: &str) -> Result<(), ModelError> { min_len("model", model, MODEL_MIN_LEN) }
pub fn validate_color(color: &str) -> Result<(), ModelError> { min_len("color", color, COLOR_MIN_LEN) }

pub fn validate_number_plate(plate: &str) -> Result<(), ModelError> {
    if plate.chars().count() != NUMBER_PLATE_LEN {
        return Err(ModelError::Validation(format!(
            "number_plate must be exactly {NUMBER_PLATE_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate the fields a client may write. The plate is checked too, even for
/// updates where it is not persisted.
pub fn validate_fields(make: &str, model: &str, color: &str, number_plate: &str) -> Result<(), ModelError> {
    validate_make(make)?;
    validate_model(model)?;
    validate_color(color)?;
    validate_number_plate(number_plate)
}

/// Insert an unowned car. A duplicate plate surfaces as `ModelError::Conflict`.
pub async fn create<C: ConnectionTrait>(
    db: &C,
    make: &str,
    model: &str,
    color: &str,
    number_plate: &str,
) -> Result<Model, ModelError> {
    validate_fields(make, model, color, number_plate)?;
    let am = ActiveModel {
        make: Set(make.to_string()),
        model: Set(model.to_string()),
        color: Set(color.to_string()),
        number_plate: Set(number_plate.to_string()),
        owner_id: Set(None),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

pub async fn find_by_plate<C: ConnectionTrait>(db: &C, number_plate: &str) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find()
        .filter(Column::NumberPlate.eq(number_plate))
        .one(db)
        .await?)
}

pub async fn list_by_make<C: ConnectionTrait>(db: &C, make: &str) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find()
        .filter(Column::Make.eq(make))
        .order_by_asc(Column::Id)
        .all(db)
        .await?)
}

/// Owned cars only (inner join), flattened with the owner's name.
pub async fn list_registered<C: ConnectionTrait>(db: &C) -> Result<Vec<RegisteredCar>, ModelError> {
    Ok(Entity::find()
        .inner_join(employee::Entity)
        .column_as(employee::Column::Name, "name")
        .order_by_asc(Column::Id)
        .into_model::<RegisteredCar>()
        .all(db)
        .await?)
}
