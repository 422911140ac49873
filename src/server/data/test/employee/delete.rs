use super::*;

/// Tests deleting an employee.
///
/// Expected: first delete reports true, second reports false.
#[tokio::test]
async fn delete_is_idempotent_on_missing_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Employee).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::employee::create_employee(db).await?;

    let repo = EmployeeRepository::new(db);

    assert!(repo.delete(created.id).await?);
    assert!(repo.get_by_id(created.id).await?.is_none());
    assert!(!repo.delete(created.id).await?);

    Ok(())
}
