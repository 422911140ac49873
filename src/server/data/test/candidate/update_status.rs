use super::*;

/// Tests overwriting a candidate's pipeline status.
///
/// Expected: Ok(Some) with the new status persisted.
#[tokio::test]
async fn updates_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_recruiting_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vacancy = factory::vacancy::create_vacancy(db).await?;
    let candidate = factory::candidate::create_candidate(db, vacancy.id).await?;

    let repo = CandidateRepository::new(db);
    let updated = repo
        .update_status(candidate.id, CandidateStatus::Screening)
        .await?
        .unwrap();

    assert_eq!(updated.status, "screening");

    Ok(())
}

/// Tests updating the status of an id that does not exist.
///
/// Expected: Ok(None).
#[tokio::test]
async fn missing_candidate_updates_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_recruiting_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CandidateRepository::new(db);
    let updated = repo.update_status(4242, CandidateStatus::Screening).await?;

    assert!(updated.is_none());

    Ok(())
}
