//! Application state shared across all request handlers.
//!
//! Initialized once during startup and cloned cheaply per request through
//! Axum's state extraction. Everything in here is either a pool, an `Arc`,
//! or a small value.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{service::admin::code::AdminCodeService, upload::FileStore};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Object storage collaborator backing the file-upload endpoints.
    pub file_store: Arc<dyn FileStore>,

    /// One-time admin bootstrap codes for first-login setup.
    pub admin_codes: AdminCodeService,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        file_store: Arc<dyn FileStore>,
        admin_codes: AdminCodeService,
    ) -> Self {
        Self {
            db,
            file_store,
            admin_codes,
        }
    }
}
