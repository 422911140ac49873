use entity::prelude::*;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::{model::task::ManagerTask, server::data::task::TaskRepository};

/// Tests that the aggregation yields concrete task kinds from both
/// sources and skips settled rows.
///
/// Expected: one vacation-approval task and one candidate-decision task;
/// decided requests and non-offered candidates are absent.
#[tokio::test]
async fn aggregates_pending_work_as_typed_tasks() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::employee::create_employee(db).await?;
    let vacancy = factory::vacancy::create_vacancy(db).await?;

    let offered =
        factory::candidate::create_candidate_with_status(db, vacancy.id, "offered").await?;
    factory::candidate::create_candidate(db, vacancy.id).await?;

    let vacation_repo = crate::server::data::vacation::VacationRepository::new(db);
    vacation_repo.set_balance(employee.id, 2026, 24).await?;
    let request = vacation_repo
        .create_request(crate::server::model::vacation::CreateVacationRequestParams {
            employee_id: employee.id,
            year: 2026,
            days: 5,
            starts_on: chrono::NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
        })
        .await?;

    let repo = TaskRepository::new(db);
    let tasks = repo.pending_tasks().await?;

    assert_eq!(tasks.len(), 2);
    assert!(tasks.iter().any(|t| matches!(
        t,
        ManagerTask::VacationApproval { request_id, days: 5, .. } if *request_id == request.id
    )));
    assert!(tasks.iter().any(|t| matches!(
        t,
        ManagerTask::CandidateDecision { candidate_id, .. } if *candidate_id == offered.id
    )));

    Ok(())
}

/// Tests that settling the work clears the task list.
///
/// Expected: an empty list once the request is decided and the candidate
/// is hired.
#[tokio::test]
async fn settled_work_produces_no_tasks() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let vacancy = factory::vacancy::create_vacancy(db).await?;
    factory::candidate::create_candidate_with_status(db, vacancy.id, "hired").await?;

    let repo = TaskRepository::new(db);
    let tasks = repo.pending_tasks().await?;

    assert!(tasks.is_empty());

    Ok(())
}
