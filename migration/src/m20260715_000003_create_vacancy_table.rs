use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vacancy::Table)
                    .if_not_exists()
                    .col(pk_auto(Vacancy::Id))
                    .col(string(Vacancy::Title))
                    .col(string(Vacancy::Department))
                    .col(text(Vacancy::Description))
                    .col(boolean(Vacancy::Open))
                    .col(timestamp_with_time_zone(Vacancy::OpenedAt))
                    .col(timestamp_with_time_zone_null(Vacancy::ClosedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vacancy::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vacancy {
    Table,
    Id,
    Title,
    Department,
    Description,
    Open,
    OpenedAt,
    ClosedAt,
}
