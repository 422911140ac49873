pub use sea_orm_migration::prelude::*;

mod m20260715_000001_create_employee_table;
mod m20260715_000002_create_account_table;
mod m20260715_000003_create_vacancy_table;
mod m20260715_000004_create_candidate_table;
mod m20260716_000005_create_document_table;
mod m20260716_000006_create_salary_table;
mod m20260717_000007_create_kpi_table;
mod m20260717_000008_create_kpi_score_table;
mod m20260718_000009_create_notification_table;
mod m20260720_000010_create_vacation_balance_table;
mod m20260720_000011_create_vacation_request_table;
mod m20260722_000012_create_access_log_table;
mod m20260724_000013_create_investment_table;
mod m20260728_000014_create_measurement_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260715_000001_create_employee_table::Migration),
            Box::new(m20260715_000002_create_account_table::Migration),
            Box::new(m20260715_000003_create_vacancy_table::Migration),
            Box::new(m20260715_000004_create_candidate_table::Migration),
            Box::new(m20260716_000005_create_document_table::Migration),
            Box::new(m20260716_000006_create_salary_table::Migration),
            Box::new(m20260717_000007_create_kpi_table::Migration),
            Box::new(m20260717_000008_create_kpi_score_table::Migration),
            Box::new(m20260718_000009_create_notification_table::Migration),
            Box::new(m20260720_000010_create_vacation_balance_table::Migration),
            Box::new(m20260720_000011_create_vacation_request_table::Migration),
            Box::new(m20260722_000012_create_access_log_table::Migration),
            Box::new(m20260724_000013_create_investment_table::Migration),
            Box::new(m20260728_000014_create_measurement_table::Migration),
        ]
    }
}
