use super::*;

/// Tests deleting a document.
///
/// Expected: the removed model is returned so the caller can clean up the
/// stored file; a second delete finds nothing.
#[tokio::test]
async fn returns_removed_model_for_file_cleanup() -> Result<(), DbErr> {
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

    let removed = repo.delete(document.id).await?.unwrap();
    assert_eq!(removed.file_key, document.file_key);

    assert!(repo.get_by_id(document.id).await?.is_none());
    assert!(repo.delete(document.id).await?.is_none());

    Ok(())
}
