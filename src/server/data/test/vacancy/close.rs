use super::*;

/// Tests closing a vacancy.
///
/// Expected: Ok(Some) with open cleared and closed_at stamped.
#[tokio::test]
async fn closes_vacancy() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Vacancy).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let vacancy = factory::vacancy::create_vacancy(db).await?;

    let repo = VacancyRepository::new(db);
    let closed = repo.close(vacancy.id).await?.unwrap();

    assert!(!closed.open);
    assert!(closed.closed_at.is_some());

    Ok(())
}

/// Tests closing an id that does not exist.
///
/// Expected: Ok(None).
#[tokio::test]
async fn missing_vacancy_closes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Vacancy).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VacancyRepository::new(db);
    let closed = repo.close(4242).await?;

    assert!(closed.is_none());

    Ok(())
}
