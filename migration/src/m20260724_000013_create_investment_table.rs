use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Investment::Table)
                    .if_not_exists()
                    .col(pk_auto(Investment::Id))
                    .col(string(Investment::Name))
                    .col(string(Investment::Partner))
                    .col(big_integer(Investment::Amount))
                    .col(string(Investment::Stage))
                    .col(timestamp_with_time_zone(Investment::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Investment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Investment {
    Table,
    Id,
    Name,
    Partner,
    Amount,
    Stage,
    CreatedAt,
}
