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
                    .table(VacationRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(VacationRequest::Id))
                    .col(integer(VacationRequest::EmployeeId))
                    .col(integer(VacationRequest::Year))
                    .col(integer(VacationRequest::Days))
                    .col(date(VacationRequest::StartsOn))
                    .col(string(VacationRequest::Status))
                    .col(timestamp_with_time_zone(VacationRequest::CreatedAt))
                    .col(timestamp_with_time_zone_null(VacationRequest::DecidedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vacation_request_employee_id")
                            .from(VacationRequest::Table, VacationRequest::EmployeeId)
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
            .drop_table(Table::drop().table(VacationRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum VacationRequest {
    Table,
    Id,
    EmployeeId,
    Year,
    Days,
    StartsOn,
    Status,
    CreatedAt,
    DecidedAt,
}
