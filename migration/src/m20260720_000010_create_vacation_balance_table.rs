use sea_orm_migration::{prelude::*, schema::*};

use super::m20260715_000001_create_employee_table::Employee;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VacationBalance::Table)
                    .if_not_exists()
                    .col(pk_auto(VacationBalance::Id))
                    .col(integer(VacationBalance::EmployeeId))
                    .col(integer(VacationBalance::Year))
                    .col(integer(VacationBalance::DaysTotal))
                    .col(integer(VacationBalance::DaysUsed))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vacation_balance_employee_id")
                            .from(VacationBalance::Table, VacationBalance::EmployeeId)
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
                    .name("idx_vacation_balance_employee_year")
                    .table(VacationBalance::Table)
                    .col(VacationBalance::EmployeeId)
                    .col(VacationBalance::Year)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VacationBalance::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum VacationBalance {
    Table,
    Id,
    EmployeeId,
    Year,
    DaysTotal,
    DaysUsed,
}
