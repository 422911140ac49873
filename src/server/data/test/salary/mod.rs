use chrono::{Duration, Utc};
use entity::prelude::*;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{data::salary::SalaryRepository, model::salary::SetSalaryParams};

fn params(employee_id: i32, amount: i64, months_ago: i64) -> SetSalaryParams {
    SetSalaryParams {
        employee_id,
        amount,
        currency: "UZS".to_string(),
        effective_from: Utc::now() - Duration::days(30 * months_ago),
    }
}

/// Tests that the newest `effective_from` row wins as the current salary.
///
/// Expected: the latest row is current, the history is newest-first.
#[tokio::test]
async fn current_salary_is_latest_effective() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Employee)
        .with_table(Salary)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::employee::create_employee(db).await?;

    let repo = SalaryRepository::new(db);
    repo.insert(params(employee.id, 9_000_000, 6)).await?;
    repo.insert(params(employee.id, 12_000_000, 0)).await?;

    let current = repo.current_for_employee(employee.id).await?.unwrap();
    assert_eq!(current.amount, 12_000_000);

    let history = repo.history_for_employee(employee.id).await?;
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].amount, 12_000_000);
    assert_eq!(history[1].amount, 9_000_000);

    Ok(())
}

/// Tests an employee with no salary rows.
///
/// Expected: Ok(None) and an empty history.
#[tokio::test]
async fn no_rows_means_no_current_salary() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Employee)
        .with_table(Salary)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::employee::create_employee(db).await?;

    let repo = SalaryRepository::new(db);

    assert!(repo.current_for_employee(employee.id).await?.is_none());
    assert!(repo.history_for_employee(employee.id).await?.is_empty());

    Ok(())
}
