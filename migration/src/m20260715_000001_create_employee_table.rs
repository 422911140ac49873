use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employee::Table)
                    .if_not_exists()
                    .col(pk_auto(Employee::Id))
                    .col(string(Employee::FullName))
                    .col(string(Employee::Position))
                    .col(string(Employee::Department))
                    .col(string_uniq(Employee::Email))
                    .col(string_null(Employee::Phone))
                    .col(date(Employee::HiredOn))
                    .col(boolean(Employee::Active))
                    .col(timestamp_with_time_zone(Employee::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employee::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Employee {
    Table,
    Id,
    FullName,
    Position,
    Department,
    Email,
    Phone,
    HiredOn,
    Active,
    CreatedAt,
}
