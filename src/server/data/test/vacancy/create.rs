use super::*;

/// Tests creating a vacancy.
///
/// Expected: Ok; vacancies start open with no close timestamp.
#[tokio::test]
async fn creates_open_vacancy() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Vacancy).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VacancyRepository::new(db);
    let vacancy = repo
        .create(CreateVacancyParams {
            title: "Field Technician".to_string(),
            department: "Operations".to_string(),
            description: "Maintains remote telemetry stations".to_string(),
        })
        .await?;

    assert!(vacancy.open);
    assert!(vacancy.closed_at.is_none());

    Ok(())
}

/// Tests the open/closed list filter.
///
/// Expected: the filter restricts both rows and totals.
#[tokio::test]
async fn filters_by_open_state() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Vacancy).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::vacancy::create_vacancy(db).await?;
    factory::vacancy::create_vacancy(db).await?;
    factory::vacancy::create_closed_vacancy(db).await?;

    let repo = VacancyRepository::new(db);

    let (open, open_total) = repo.get_paginated(Some(true), 0, 10).await?;
    assert_eq!(open_total, 2);
    assert!(open.iter().all(|v| v.open));

    let (closed, closed_total) = repo.get_paginated(Some(false), 0, 10).await?;
    assert_eq!(closed_total, 1);
    assert!(closed.iter().all(|v| !v.open));

    Ok(())
}
