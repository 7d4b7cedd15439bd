//! Create `cars` table.
//!
//! `number_plate` is unique; `owner_id` is a nullable reference to
//! `employees.id`. Deleting a car never touches the employee.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cars::Table)
                    .if_not_exists()
                    .col(pk_auto(Cars::Id))
                    .col(string(Cars::Make))
                    .col(string(Cars::Model))
                    .col(string(Cars::Color))
                    .col(string_len(Cars::NumberPlate, 8).unique_key())
                    .col(integer_null(Cars::OwnerId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cars_owner")
                            .from(Cars::Table, Cars::OwnerId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_cars_make")
                    .table(Cars::Table)
                    .col(Cars::Make)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Cars::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Cars {
    Table,
    Id,
    Make,
    Model,
    Color,
    NumberPlate,
    OwnerId,
}

#[derive(DeriveIden)]
enum Employees { Table, Id }
