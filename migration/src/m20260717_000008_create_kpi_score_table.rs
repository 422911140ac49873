use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260715_000001_create_employee_table::Employee, m20260717_000007_create_kpi_table::Kpi,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(KpiScore::Table)
                    .if_not_exists()
                    .col(pk_auto(KpiScore::Id))
                    .col(integer(KpiScore::KpiId))
                    .col(integer(KpiScore::EmployeeId))
                    .col(string(KpiScore::Period))
                    .col(integer(KpiScore::Score))
                    .col(timestamp_with_time_zone(KpiScore::RecordedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_kpi_score_kpi_id")
                            .from(KpiScore::Table, KpiScore::KpiId)
                            .to(Kpi::Table, Kpi::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_kpi_score_employee_id")
                            .from(KpiScore::Table, KpiScore::EmployeeId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_kpi_score_employee_period")
                    .table(KpiScore::Table)
                    .col(KpiScore::KpiId)
                    .col(KpiScore::EmployeeId)
                    .col(KpiScore::Period)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(KpiScore::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum KpiScore {
    Table,
    Id,
    KpiId,
    EmployeeId,
    Period,
    Score,
    RecordedAt,
}
