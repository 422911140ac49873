use super::*;

/// Tests registering a candidate.
///
/// Expected: Ok; candidates start in the `applied` stage.
#[tokio::test]
async fn creates_candidate_in_applied_state() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_recruiting_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vacancy = factory::vacancy::create_vacancy(db).await?;

    let repo = CandidateRepository::new(db);
    let candidate = repo.create(create_params(vacancy.id)).await?;

    assert_eq!(candidate.status, "applied");
    assert_eq!(candidate.vacancy_id, vacancy.id);

    Ok(())
}

/// Tests that a candidate cannot reference a nonexistent vacancy.
///
/// Expected: Err recognized as a foreign-key violation.
#[tokio::test]
async fn rejects_unknown_vacancy_reference() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_recruiting_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CandidateRepository::new(db);
    let err = repo.create(create_params(4242)).await.unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::ForeignKeyConstraintViolation(_))
    ));

    Ok(())
}

/// Tests fetching a candidate together with the related vacancy.
///
/// Expected: Ok(Some) carrying the vacancy model.
#[tokio::test]
async fn fetches_candidate_with_vacancy() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_recruiting_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vacancy = factory::vacancy::create_vacancy(db).await?;
    let candidate = factory::candidate::create_candidate(db, vacancy.id).await?;

    let repo = CandidateRepository::new(db);
    let (found, related) = repo.get_by_id(candidate.id).await?.unwrap();

    assert_eq!(found.id, candidate.id);
    assert_eq!(related.map(|v| v.id), Some(vacancy.id));

    Ok(())
}
