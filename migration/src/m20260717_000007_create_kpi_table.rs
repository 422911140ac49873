use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Kpi::Table)
                    .if_not_exists()
                    .col(pk_auto(Kpi::Id))
                    .col(string_uniq(Kpi::Name))
                    .col(text(Kpi::Description))
                    .col(integer(Kpi::Weight))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Kpi::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Kpi {
    Table,
    Id,
    Name,
    Description,
    Weight,
}
