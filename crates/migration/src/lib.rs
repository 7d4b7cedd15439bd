//! Migrator registering entity-specific migrations in dependency order.
//! Every table is created with `IF NOT EXISTS`, so running `up` at each
//! startup is idempotent.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_employees;
mod m20240101_000002_create_cars;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_employees::Migration),
            // cars references employees
            Box::new(m20240101_000002_create_cars::Migration),
        ]
    }
}
