use super::*;

/// Tests that listing is scoped to one resource.
///
/// Expected: other reservoirs' measurements are invisible.
#[tokio::test]
async fn scopes_to_resource() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Measurement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MeasurementRepository::new(db);
    repo.create(params(1, 30.0)).await?;
    repo.create(params(1, 31.0)).await?;
    repo.create(params(2, 12.0)).await?;

    let (measurements, total) = repo.get_for_resource(1, None, None, 0, 10).await?;

    assert_eq!(total, 2);
    assert!(measurements.iter().all(|m| m.res_id == 1));

    Ok(())
}

/// Tests the time-bounded listing.
///
/// Expected: only measurements inside the window are returned.
#[tokio::test]
async fn applies_time_bounds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Measurement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();

    let repo = MeasurementRepository::new(db);
    repo.create(StoreMeasurementParams {
        res_id: 1,
        level: 10.0,
        temperature: 20.0,
        measured_at: now - Duration::hours(3),
    })
    .await?;
    repo.create(StoreMeasurementParams {
        res_id: 1,
        level: 11.0,
        temperature: 20.0,
        measured_at: now - Duration::hours(1),
    })
    .await?;

    let (recent, total) = repo
        .get_for_resource(1, Some(now - Duration::hours(2)), None, 0, 10)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(recent[0].level, 11.0);

    Ok(())
}
