//! Handler-level tests driving the real router against an in-memory
//! database, covering the uniform request contract: decode failures,
//! validation messages, identity checks, sentinel-error mapping, and the
//! upload compensation path.

mod document;
mod telemetry;

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;

use crate::server::{
    router, service::admin::code::AdminCodeService, startup, state::AppState, upload::FileStore,
};

/// In-memory file store counting store/delete calls, for asserting the
/// two-phase upload compensation.
#[derive(Default)]
pub struct RecordingFileStore {
    pub stored: AtomicUsize,
    pub deleted: AtomicUsize,
}

#[async_trait]
impl FileStore for RecordingFileStore {
    async fn store(&self, file_name: &str, _bytes: &[u8]) -> Result<String, std::io::Error> {
        let n = self.stored.fetch_add(1, Ordering::SeqCst);
        Ok(format!("fake-{}-{}", n, file_name))
    }

    async fn delete(&self, _key: &str) -> Result<(), std::io::Error> {
        self.deleted.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Builds the full application router over a fresh in-memory database.
async fn test_app_with_store(
    file_store: Arc<dyn FileStore>,
) -> (Router, DatabaseConnection) {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.database().await.unwrap().clone();

    let session_layer = startup::connect_to_session(&db).await.unwrap();

    let state = AppState::new(db.clone(), file_store, AdminCodeService::new());

    let app = router::router().with_state(state).layer(session_layer);

    (app, db)
}

async fn test_app() -> (Router, DatabaseConnection) {
    test_app_with_store(Arc::new(RecordingFileStore::default())).await
}

/// Logs in as a fresh admin account and returns the session cookie.
async fn login_as_admin(app: &Router, db: &DatabaseConnection) -> String {
    let account = factory::account::AccountFactory::new(db)
        .access_code("test-code")
        .admin(true)
        .build()
        .await
        .unwrap();

    let body = serde_json::json!({ "username": account.username, "code": "test-code" });

    let response = app
        .clone()
        .oneshot(
            Request::post("/api/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    response
        .headers()
        .get(header::SET_COOKIE)
        .expect("login must set a session cookie")
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
