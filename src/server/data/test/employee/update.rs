use super::*;

/// Tests updating an existing employee.
///
/// Expected: Ok(Some) with the new field values persisted.
#[tokio::test]
async fn updates_existing_employee() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Employee).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::employee::create_employee(db).await?;

    let repo = EmployeeRepository::new(db);
    let updated = repo
        .update(UpdateEmployeeParams {
            id: created.id,
            full_name: "Ana Karimova".to_string(),
            position: "Lead Engineer".to_string(),
            department: "Hydrology".to_string(),
            email: created.email.clone(),
            phone: None,
            active: false,
        })
        .await?
        .unwrap();

    assert_eq!(updated.position, "Lead Engineer");
    assert!(!updated.active);

    let reloaded = repo.get_by_id(created.id).await?.unwrap();
    assert_eq!(reloaded.position, "Lead Engineer");

    Ok(())
}

/// Tests updating an id that does not exist.
///
/// Expected: Ok(None); nothing is created.
#[tokio::test]
async fn missing_employee_updates_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Employee).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EmployeeRepository::new(db);
    let updated = repo
        .update(UpdateEmployeeParams {
            id: 4242,
            full_name: "Nobody".to_string(),
            position: "Ghost".to_string(),
            department: "Nowhere".to_string(),
            email: "nobody@example.com".to_string(),
            phone: None,
            active: true,
        })
        .await?;

    assert!(updated.is_none());

    Ok(())
}
