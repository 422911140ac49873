use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Measurement::Table)
                    .if_not_exists()
                    .col(pk_auto(Measurement::Id))
                    .col(big_integer(Measurement::ResId))
                    .col(double(Measurement::Level))
                    .col(double(Measurement::Temperature))
                    .col(timestamp_with_time_zone(Measurement::MeasuredAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Measurement::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Measurement {
    Table,
    Id,
    ResId,
    Level,
    Temperature,
    MeasuredAt,
}
