use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

fn reading_body() -> String {
    serde_json::json!({
        "indicator_level": 10.0,
        "current": 12.0,
        "resistance": 120.0
    })
    .to_string()
}

/// The generic ingestion path converts and persists with the exact numeric
/// policy: ceiling rounding on the level.
///
/// Expected: bare 201 envelope; the stored row carries level 30.62.
#[tokio::test]
async fn ingests_and_converts_reading() {
    let (app, db) = test_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::post("/api/telemetry/resources/1/measurements")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(reading_body()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response_json(response).await;
    assert_eq!(body["status"], 201);
    assert!(body.get("error").is_none());

    let stored = entity::prelude::Measurement::find()
        .all(&db)
        .await
        .unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].res_id, 1);
    assert_eq!(stored[0].level, 30.62);
    assert!((stored[0].temperature - 51.948051948051948).abs() < 1e-9);
}

/// An unsupported reservoir id is rejected before any computation and the
/// offending id is named; nothing is persisted.
///
/// Expected: 400 whose error mentions the id; the table stays empty.
#[tokio::test]
async fn unsupported_reservoir_persists_nothing() {
    let (app, db) = test_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::post("/api/telemetry/resources/7/measurements")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(reading_body()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    let error = body["error"].as_str().unwrap();
    assert!(error.contains('7'));

    let count = entity::prelude::Measurement::find()
        .count(&db)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

/// The fixed Andijan path implies the reservoir id.
///
/// Expected: bare 201; the row lands under resource 1.
#[tokio::test]
async fn andijan_path_implies_resource_id() {
    let (app, db) = test_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::post("/api/telemetry/andijan/measurements")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(reading_body()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let stored = entity::prelude::Measurement::find()
        .all(&db)
        .await
        .unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].res_id, 1);
}

/// Declarative validation on the reading itself.
///
/// Expected: 400 naming the resistance field; nothing persisted.
#[tokio::test]
async fn dead_rtd_element_fails_validation() {
    let (app, db) = test_app().await;

    let body = serde_json::json!({
        "indicator_level": 10.0,
        "current": 12.0,
        "resistance": 0.0
    });

    let response = app
        .clone()
        .oneshot(
            Request::post("/api/telemetry/resources/1/measurements")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error"], "field 'resistance' is not valid");

    let count = entity::prelude::Measurement::find()
        .count(&db)
        .await
        .unwrap();
    assert_eq!(count, 0);
}
