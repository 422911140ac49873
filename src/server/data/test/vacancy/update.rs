use super::*;

/// Tests updating a vacancy's descriptive fields.
///
/// Expected: Ok(Some); the open state is untouched by updates.
#[tokio::test]
async fn updates_descriptive_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Vacancy).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let vacancy = factory::vacancy::create_vacancy(db).await?;

    let repo = VacancyRepository::new(db);
    let updated = repo
        .update(UpdateVacancyParams {
            id: vacancy.id,
            title: "Senior Field Technician".to_string(),
            department: "Operations".to_string(),
            description: "Maintains remote stations".to_string(),
        })
        .await?
        .unwrap();

    assert_eq!(updated.title, "Senior Field Technician");
    assert!(updated.open);

    Ok(())
}

/// Tests updating an id that does not exist.
///
/// Expected: Ok(None).
#[tokio::test]
async fn missing_vacancy_updates_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Vacancy).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VacancyRepository::new(db);
    let updated = repo
        .update(UpdateVacancyParams {
            id: 4242,
            title: "Ghost".to_string(),
            department: "Nowhere".to_string(),
            description: "Does not exist".to_string(),
        })
        .await?;

    assert!(updated.is_none());

    Ok(())
}
