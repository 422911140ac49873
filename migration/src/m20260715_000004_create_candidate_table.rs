use sea_orm_migration::{prelude::*, schema::*};

use super::m20260715_000003_create_vacancy_table::Vacancy;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Candidate::Table)
                    .if_not_exists()
                    .col(pk_auto(Candidate::Id))
                    .col(integer(Candidate::VacancyId))
                    .col(string(Candidate::FullName))
                    .col(string(Candidate::Email))
                    .col(string_null(Candidate::Phone))
                    .col(string(Candidate::Status))
                    .col(timestamp_with_time_zone(Candidate::AppliedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_candidate_vacancy_id")
                            .from(Candidate::Table, Candidate::VacancyId)
                            .to(Vacancy::Table, Vacancy::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Candidate::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Candidate {
    Table,
    Id,
    VacancyId,
    FullName,
    Email,
    Phone,
    Status,
    AppliedAt,
}
