use super::*;

/// Tests marking one notification read.
///
/// Expected: true for the owner, false for another account's notification.
#[tokio::test]
async fn only_the_owner_can_mark_read() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::account::create_account(db).await?;
    let other = factory::account::create_account(db).await?;

    let repo = NotificationRepository::new(db);
    repo.broadcast(&[owner.id], "Hello", "World").await?;

    let (notifications, _) = repo.get_for_account(owner.id, 0, 10).await?;
    let id = notifications[0].id;

    assert!(!repo.mark_read(id, other.id).await?);
    assert!(repo.mark_read(id, owner.id).await?);
    assert_eq!(repo.unread_count(owner.id).await?, 0);

    Ok(())
}

/// Tests marking everything read at once.
///
/// Expected: only unread rows of the target account are touched.
#[tokio::test]
async fn mark_all_read_counts_changed_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::account::create_account(db).await?;
    let bystander = factory::account::create_account(db).await?;

    let repo = NotificationRepository::new(db);
    repo.broadcast(&[account.id, bystander.id], "One", "1").await?;
    repo.broadcast(&[account.id], "Two", "2").await?;

    let changed = repo.mark_all_read(account.id).await?;

    assert_eq!(changed, 2);
    assert_eq!(repo.unread_count(account.id).await?, 0);
    assert_eq!(repo.unread_count(bystander.id).await?, 1);

    Ok(())
}
