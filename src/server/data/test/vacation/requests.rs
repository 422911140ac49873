use super::*;

/// Tests filing a request.
///
/// Expected: Ok; requests start pending with no decision timestamp.
#[tokio::test]
async fn creates_pending_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vacation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::employee::create_employee(db).await?;

    let repo = VacationRepository::new(db);
    let request = repo.create_request(request_params(employee.id, 5)).await?;

    assert_eq!(request.status, "pending");
    assert!(request.decided_at.is_none());

    Ok(())
}

/// Tests stamping a decision.
///
/// Expected: Ok(Some) with the new status and a decision timestamp.
#[tokio::test]
async fn decides_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vacation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::employee::create_employee(db).await?;

    let repo = VacationRepository::new(db);
    let request = repo.create_request(request_params(employee.id, 5)).await?;

    let decided = repo
        .decide_request(request.id, VacationRequestStatus::Approved)
        .await?
        .unwrap();

    assert_eq!(decided.status, "approved");
    assert!(decided.decided_at.is_some());

    Ok(())
}
