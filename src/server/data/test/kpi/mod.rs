use entity::prelude::*;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::kpi::{KpiRepository, KpiScoreRepository},
    model::kpi::{CreateKpiParams, RecordKpiScoreParams},
};

fn score_params(kpi_id: i32, employee_id: i32, period: &str) -> RecordKpiScoreParams {
    RecordKpiScoreParams {
        kpi_id,
        employee_id,
        period: period.to_string(),
        score: 85,
    }
}

/// Tests creating an indicator and the name uniqueness constraint.
///
/// Expected: second insert with the same name is a unique violation.
#[tokio::test]
async fn kpi_names_are_unique() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Kpi).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = KpiRepository::new(db);
    repo.create(CreateKpiParams {
        name: "Delivery quality".to_string(),
        description: "Quality of delivered work".to_string(),
        weight: 40,
    })
    .await?;

    let err = repo
        .create(CreateKpiParams {
            name: "Delivery quality".to_string(),
            description: "Duplicate".to_string(),
            weight: 10,
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests the per-period existence probe backing the duplicate-score check.
///
/// Expected: true only for the recorded kpi/employee/period combination.
#[tokio::test]
async fn score_exists_is_scoped_to_period() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Employee)
        .with_table(Kpi)
        .with_table(KpiScore)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::employee::create_employee(db).await?;
    let kpi = factory::kpi::create_kpi(db).await?;

    let repo = KpiScoreRepository::new(db);
    repo.record(score_params(kpi.id, employee.id, "2026-07")).await?;

    assert!(repo.exists(kpi.id, employee.id, "2026-07").await?);
    assert!(!repo.exists(kpi.id, employee.id, "2026-08").await?);

    Ok(())
}

/// Tests fetching an employee's scores with the indicator definitions.
///
/// Expected: each score carries its related kpi model.
#[tokio::test]
async fn fetches_scores_with_indicator() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Employee)
        .with_table(Kpi)
        .with_table(KpiScore)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::employee::create_employee(db).await?;
    let kpi = factory::kpi::create_kpi(db).await?;

    let repo = KpiScoreRepository::new(db);
    repo.record(score_params(kpi.id, employee.id, "2026-07")).await?;

    let scores = repo.get_by_employee(employee.id).await?;

    assert_eq!(scores.len(), 1);
    let (score, related) = &scores[0];
    assert_eq!(score.score, 85);
    assert_eq!(related.as_ref().map(|k| k.id), Some(kpi.id));

    Ok(())
}
