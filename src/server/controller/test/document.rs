use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

const BOUNDARY: &str = "test-boundary";

fn multipart_body(title: &str, kind: &str, with_file: bool) -> String {
    let mut body = String::new();

    body.push_str(&format!(
        "--{}\r\nContent-Disposition: form-data; name=\"title\"\r\n\r\n{}\r\n",
        BOUNDARY, title
    ));
    body.push_str(&format!(
        "--{}\r\nContent-Disposition: form-data; name=\"kind\"\r\n\r\n{}\r\n",
        BOUNDARY, kind
    ));

    if with_file {
        body.push_str(&format!(
            "--{}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"contract.pdf\"\r\nContent-Type: application/pdf\r\n\r\nPDFDATA\r\n",
            BOUNDARY
        ));
    }

    body.push_str(&format!("--{}--\r\n", BOUNDARY));
    body
}

fn multipart_request(uri: String, cookie: &str, body: String) -> Request<Body> {
    Request::post(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .header(header::COOKIE, cookie)
        .body(Body::from(body))
        .unwrap()
}

/// A successful upload stages the file once and never deletes it.
///
/// Expected: 201, one store call, zero delete calls, one document row.
#[tokio::test]
async fn upload_commits_staged_file_on_success() {
    let store = Arc::new(RecordingFileStore::default());
    let (app, db) = test_app_with_store(store.clone()).await;
    let cookie = login_as_admin(&app, &db).await;

    let employee = factory::employee::create_employee(&db).await.unwrap();

    let response = app
        .clone()
        .oneshot(multipart_request(
            format!("/api/employees/{}/documents", employee.id),
            &cookie,
            multipart_body("Contract", "contract", true),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(store.stored.load(Ordering::SeqCst), 1);
    assert_eq!(store.deleted.load(Ordering::SeqCst), 0);

    let count = entity::prelude::Document::find().count(&db).await.unwrap();
    assert_eq!(count, 1);
}

/// When the entity write fails after staging, the staged upload is deleted
/// exactly once: not orphaned and not double-deleted.
///
/// Expected: 400 (invalid reference), one store call, one delete call, no
/// document row.
#[tokio::test]
async fn upload_compensates_when_entity_write_fails() {
    let store = Arc::new(RecordingFileStore::default());
    let (app, db) = test_app_with_store(store.clone()).await;
    let cookie = login_as_admin(&app, &db).await;

    let response = app
        .clone()
        .oneshot(multipart_request(
            "/api/employees/4242/documents".to_string(),
            &cookie,
            multipart_body("Contract", "contract", true),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error"], "invalid reference");

    assert_eq!(store.stored.load(Ordering::SeqCst), 1);
    assert_eq!(store.deleted.load(Ordering::SeqCst), 1);

    let count = entity::prelude::Document::find().count(&db).await.unwrap();
    assert_eq!(count, 0);
}

/// Multipart validation runs before anything is staged.
///
/// Expected: 400 naming the missing fields; the store is never touched.
#[tokio::test]
async fn missing_parts_fail_validation_before_staging() {
    let store = Arc::new(RecordingFileStore::default());
    let (app, db) = test_app_with_store(store.clone()).await;
    let cookie = login_as_admin(&app, &db).await;

    let employee = factory::employee::create_employee(&db).await.unwrap();

    let response = app
        .clone()
        .oneshot(multipart_request(
            format!("/api/employees/{}/documents", employee.id),
            &cookie,
            multipart_body("", "contract", false),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("field 'title' is required"));
    assert!(error.contains("field 'file' is required"));

    assert_eq!(store.stored.load(Ordering::SeqCst), 0);
    assert_eq!(store.deleted.load(Ordering::SeqCst), 0);
}
