use super::*;

/// Tests the fan-out: one row per recipient, all unread.
///
/// Expected: Ok(3) and three unread rows in the table.
#[tokio::test]
async fn creates_one_row_per_recipient() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::account::create_account(db).await?;
    let b = factory::account::create_account(db).await?;
    let c = factory::account::create_account(db).await?;

    let repo = NotificationRepository::new(db);
    let created = repo
        .broadcast(&[a.id, b.id, c.id], "Maintenance window", "Friday 18:00")
        .await?;

    assert_eq!(created, 3);
    assert_eq!(Notification::find().count(db).await?, 3);
    assert_eq!(repo.unread_count(b.id).await?, 1);

    Ok(())
}

/// Tests broadcasting to an empty recipient list.
///
/// Expected: Ok(0), no rows written.
#[tokio::test]
async fn empty_recipient_list_writes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NotificationRepository::new(db);
    let created = repo.broadcast(&[], "Nothing", "to see here").await?;

    assert_eq!(created, 0);
    assert_eq!(Notification::find().count(db).await?, 0);

    Ok(())
}
