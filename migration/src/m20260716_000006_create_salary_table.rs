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
                    .table(Salary::Table)
                    .if_not_exists()
                    .col(pk_auto(Salary::Id))
                    .col(integer(Salary::EmployeeId))
                    .col(big_integer(Salary::Amount))
                    .col(string(Salary::Currency))
                    .col(timestamp_with_time_zone(Salary::EffectiveFrom))
                    .col(timestamp_with_time_zone(Salary::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_salary_employee_id")
                            .from(Salary::Table, Salary::EmployeeId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Salary::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Salary {
    Table,
    Id,
    EmployeeId,
    Amount,
    Currency,
    EffectiveFrom,
    CreatedAt,
}
