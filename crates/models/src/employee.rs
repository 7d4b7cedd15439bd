use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

pub const NAME_MIN_LEN: usize = 2;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

/// Employees keep no back-pointer to cars; owners are found by joining from `cars`.
#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match *self {}
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.chars().count() < NAME_MIN_LEN {
        return Err(ModelError::Validation(format!(
            "name must be at least {NAME_MIN_LEN} characters"
        )));
    }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(db: &C, name: &str) -> Result<Model, ModelError> {
    validate_name(name)?;
    let am = ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_needs_two_characters() {
        assert!(validate_name("A").is_err());
        assert!(validate_name("").is_err());
        assert!(validate_name("Al").is_ok());
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        // two characters, four bytes
        assert!(validate_name("Żó").is_ok());
        assert!(validate_name("Ż").is_err());
    }
}
