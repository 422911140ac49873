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
                    .table(Document::Table)
                    .if_not_exists()
                    .col(pk_auto(Document::Id))
                    .col(integer(Document::EmployeeId))
                    .col(string(Document::Title))
                    .col(string(Document::Kind))
                    .col(string(Document::FileKey))
                    .col(timestamp_with_time_zone(Document::UploadedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_document_employee_id")
                            .from(Document::Table, Document::EmployeeId)
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
            .drop_table(Table::drop().table(Document::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Document {
    Table,
    Id,
    EmployeeId,
    Title,
    Kind,
    FileKey,
    UploadedAt,
}
