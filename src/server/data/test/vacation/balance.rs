use super::*;

/// Tests creating and adjusting a yearly balance.
///
/// Expected: the first set inserts with zero used days; the second only
/// moves the total and keeps the used days.
#[tokio::test]
async fn set_balance_preserves_used_days() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vacation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::employee::create_employee(db).await?;

    let repo = VacationRepository::new(db);

    let balance = repo.set_balance(employee.id, 2026, 24).await?;
    assert_eq!(balance.days_total, 24);
    assert_eq!(balance.days_used, 0);

    repo.add_used_days(employee.id, 2026, 5).await?;

    let adjusted = repo.set_balance(employee.id, 2026, 30).await?;
    assert_eq!(adjusted.days_total, 30);
    assert_eq!(adjusted.days_used, 5);

    Ok(())
}

/// Tests booking days against a balance that does not exist.
///
/// Expected: Ok(None); nothing is created implicitly.
#[tokio::test]
async fn add_used_days_needs_a_balance() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vacation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::employee::create_employee(db).await?;

    let repo = VacationRepository::new(db);
    let result = repo.add_used_days(employee.id, 2026, 3).await?;

    assert!(result.is_none());

    Ok(())
}
