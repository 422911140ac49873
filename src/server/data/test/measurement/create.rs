use super::*;

/// Tests persisting a derived measurement.
///
/// Expected: Ok with all fields stored as given.
#[tokio::test]
async fn stores_derived_measurement() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Measurement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MeasurementRepository::new(db);
    let measurement = repo.create(params(1, 30.62)).await?;

    assert_eq!(measurement.res_id, 1);
    assert_eq!(measurement.level, 30.62);
    assert_eq!(measurement.temperature, 21.5);

    Ok(())
}
