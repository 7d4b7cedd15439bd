//! Store-backed tests for the entity helpers, run against in-memory SQLite.

use anyhow::Result;
use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::{DatabaseConnection, EntityTrait};

use crate::db::connect_with_config;
use crate::errors::ModelError;
use crate::{car, employee};

async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect_with_config(&DatabaseConfig::in_memory()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

#[tokio::test]
async fn migrations_are_idempotent() -> Result<()> {
    let db = setup_test_db().await?;
    migration::Migrator::up(&db, None).await?;
    assert!(employee::Entity::find().all(&db).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn employee_ids_are_assigned_by_store() -> Result<()> {
    let db = setup_test_db().await?;
    let first = employee::create(&db, "User Name").await?;
    let second = employee::create(&db, "User Name").await?;
    assert_eq!(first.id, 1);
    assert!(second.id > first.id);
    assert_eq!(employee::find(&db, second.id).await?.map(|e| e.name), Some("User Name".into()));
    Ok(())
}

#[tokio::test]
async fn car_created_without_owner() -> Result<()> {
    let db = setup_test_db().await?;
    let created = car::create(&db, "Toyota", "Fortuner", "White", "ZX10 MNB").await?;
    assert_eq!(created.owner_id, None);
    let found = car::find_by_plate(&db, "ZX10 MNB").await?.expect("car by plate");
    assert_eq!(found, created);
    assert!(car::find_by_plate(&db, "ZX10 MNC").await?.is_none());
    Ok(())
}

#[tokio::test]
async fn duplicate_plate_maps_to_conflict() -> Result<()> {
    let db = setup_test_db().await?;
    car::create(&db, "Toyota", "Fortuner", "White", "ZX10 MNB").await?;
    let err = car::create(&db, "Honda", "Civic", "Black", "ZX10 MNB").await.unwrap_err();
    assert!(matches!(err, ModelError::Conflict(_)), "got {err:?}");
    Ok(())
}

#[tokio::test]
async fn invalid_fields_never_reach_store() -> Result<()> {
    let db = setup_test_db().await?;
    let err = car::create(&db, "Toyota", "Fortuner", "White", "SHORT").await.unwrap_err();
    assert!(matches!(err, ModelError::Validation(_)));
    assert!(car::Entity::find().all(&db).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn registered_join_skips_unowned_cars() -> Result<()> {
    use sea_orm::{ActiveModelTrait, Set};

    let db = setup_test_db().await?;
    let owner = employee::create(&db, "User Name").await?;
    let owned = car::create(&db, "Toyota", "Fortuner", "White", "ZX10 MNB").await?;
    car::create(&db, "Toyota", "Yaris", "Red", "AB01 DEF").await?;

    let mut am: car::ActiveModel = owned.clone().into();
    am.owner_id = Set(Some(owner.id));
    am.update(&db).await?;

    let rows = car::list_registered(&db).await?;
    assert_eq!(
        rows,
        vec![car::RegisteredCar {
            id: owned.id,
            make: "Toyota".into(),
            model: "Fortuner".into(),
            color: "White".into(),
            number_plate: "ZX10 MNB".into(),
            owner_id: owner.id,
            name: "User Name".into(),
        }]
    );
    Ok(())
}

#[tokio::test]
async fn list_by_make_is_exact() -> Result<()> {
    let db = setup_test_db().await?;
    car::create(&db, "Toyota", "Fortuner", "White", "ZX10 MNB").await?;
    car::create(&db, "toyota", "Yaris", "Red", "AB01 DEF").await?;
    let rows = car::list_by_make(&db, "Toyota").await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].number_plate, "ZX10 MNB");
    Ok(())
}
