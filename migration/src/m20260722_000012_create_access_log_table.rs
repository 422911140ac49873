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
                    .table(AccessLog::Table)
                    .if_not_exists()
                    .col(pk_auto(AccessLog::Id))
                    .col(integer(AccessLog::EmployeeId))
                    .col(string(AccessLog::CardId))
                    .col(string(AccessLog::Direction))
                    .col(timestamp_with_time_zone(AccessLog::LoggedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_access_log_employee_id")
                            .from(AccessLog::Table, AccessLog::EmployeeId)
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
            .drop_table(Table::drop().table(AccessLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AccessLog {
    Table,
    Id,
    EmployeeId,
    CardId,
    Direction,
    LoggedAt,
}
