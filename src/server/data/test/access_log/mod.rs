use chrono::{Duration, Utc};
use entity::prelude::*;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::access_log::AccessLogRepository, model::access_log::CreateAccessLogParams,
};

fn swipe(employee_id: i32, direction: &str, minutes_ago: i64) -> CreateAccessLogParams {
    CreateAccessLogParams {
        employee_id,
        card_id: "card-7".to_string(),
        direction: direction.to_string(),
        logged_at: Utc::now() - Duration::minutes(minutes_ago),
    }
}

/// Tests recording and listing swipes.
///
/// Expected: newest first, scoped to the employee.
#[tokio::test]
async fn lists_swipes_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Employee)
        .with_table(AccessLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::employee::create_employee(db).await?;
    let other = factory::employee::create_employee(db).await?;

    let repo = AccessLogRepository::new(db);
    repo.create(swipe(employee.id, "in", 60)).await?;
    repo.create(swipe(employee.id, "out", 10)).await?;
    repo.create(swipe(other.id, "in", 5)).await?;

    let (logs, total) = repo.get_by_employee(employee.id, 0, 10).await?;

    assert_eq!(total, 2);
    assert_eq!(logs[0].direction, "out");
    assert_eq!(logs[1].direction, "in");

    Ok(())
}

/// Tests the since-cutoff query backing the presence fold.
///
/// Expected: swipes older than the cutoff are excluded; results come back
/// oldest first.
#[tokio::test]
async fn get_since_applies_cutoff() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Employee)
        .with_table(AccessLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::employee::create_employee(db).await?;

    let repo = AccessLogRepository::new(db);
    repo.create(swipe(employee.id, "in", 60 * 30)).await?;
    repo.create(swipe(employee.id, "in", 45)).await?;
    repo.create(swipe(employee.id, "out", 5)).await?;

    let logs = repo.get_since(Utc::now() - Duration::hours(2)).await?;

    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].direction, "in");
    assert_eq!(logs[1].direction, "out");

    Ok(())
}
