use super::*;

/// Tests deleting a vacancy.
///
/// Expected: true on the first delete, false once the row is gone.
#[tokio::test]
async fn deletes_vacancy_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Vacancy).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let vacancy = factory::vacancy::create_vacancy(db).await?;

    let repo = VacancyRepository::new(db);

    assert!(repo.delete(vacancy.id).await?);
    assert!(!repo.delete(vacancy.id).await?);

    Ok(())
}
