use super::*;

/// Tests linking a staged upload to an employee.
///
/// Expected: Ok with the storage key persisted.
#[tokio::test]
async fn links_upload_to_employee() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Employee)
        .with_table(Document)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::employee::create_employee(db).await?;

    let repo = DocumentRepository::new(db);
    let document = repo.create(create_params(employee.id)).await?;

    assert_eq!(document.file_key, "abc123-contract.pdf");
    assert_eq!(document.employee_id, employee.id);

    Ok(())
}

/// Tests that a document cannot reference a nonexistent employee.
///
/// Expected: Err recognized as a foreign-key violation, so the two-phase
/// upload path can compensate.
#[tokio::test]
async fn rejects_unknown_employee_reference() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Employee)
        .with_table(Document)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DocumentRepository::new(db);
    let err = repo.create(create_params(4242)).await.unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::ForeignKeyConstraintViolation(_))
    ));

    Ok(())
}
