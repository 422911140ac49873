use super::*;

/// Tests creating a new employee.
///
/// Expected: Ok; new hires start active.
#[tokio::test]
async fn creates_employee_as_active() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Employee).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EmployeeRepository::new(db);
    let employee = repo.create(create_params("ana@example.com")).await?;

    assert_eq!(employee.full_name, "Ana Karimova");
    assert_eq!(employee.email, "ana@example.com");
    assert!(employee.active);

    Ok(())
}

/// Tests that two employees cannot share an email address.
///
/// Expected: Err recognized as a unique-constraint violation.
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Employee).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EmployeeRepository::new(db);
    repo.create(create_params("dup@example.com")).await?;

    let err = repo.create(create_params("dup@example.com")).await.unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
