use super::*;

/// Tests looking up an existing employee by id.
///
/// Expected: Ok(Some) with matching fields.
#[tokio::test]
async fn finds_existing_employee() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Employee).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::employee::create_employee(db).await?;

    let repo = EmployeeRepository::new(db);
    let found = repo.get_by_id(created.id).await?;

    assert_eq!(found, Some(created));

    Ok(())
}

/// Tests looking up an id that does not exist.
///
/// Expected: Ok(None), not an error.
#[tokio::test]
async fn missing_employee_is_none() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Employee).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EmployeeRepository::new(db);
    let found = repo.get_by_id(4242).await?;

    assert!(found.is_none());

    Ok(())
}
