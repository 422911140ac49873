//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type every controller returns. It wraps
//! domain-specific errors and implements `IntoResponse`, so handlers bubble
//! errors up with `?` and the mapping to status codes lives in one place.
//! Database sentinel errors (record not found, unique and foreign-key
//! violations) are recognized here and translated to 404/409/400; everything
//! unexpected is logged server-side and surfaced as a generic 500.

pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::api::StatusDto,
    server::{
        error::{auth::AuthError, config::ConfigError},
        service::telemetry::convert::ConvertError,
    },
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error; maps to 401/403 in
    /// `AuthError::into_response()`.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Sensor conversion error. A coverage gap in reservoir support, not a
    /// runtime fault, so it maps to 400 with the offending id named.
    #[error(transparent)]
    ConvertErr(#[from] ConvertError),

    /// Database operation error from SeaORM. Sentinel cases (not found,
    /// unique violation, foreign-key violation) get specific status codes;
    /// anything else is a 500.
    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// File storage I/O error from the upload collaborator.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Request failed declarative field validation. One message per failing
    /// field, reported verbatim to the client as a 400.
    #[error("{}", .0.join(", "))]
    Validation(Vec<String>),

    /// Resource not found; 404 with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request; 400 with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// State conflict (duplicate entry, illegal state transition); 409.
    #[error("{0}")]
    Conflict(String),

    /// Endpoint is deliberately stubbed; 501.
    #[error("{0} is not implemented")]
    NotImplemented(String),

    /// Internal server error with custom message. The message is logged but
    /// a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

fn envelope(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(StatusDto::error(status, message))).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::ConvertErr(err) => envelope(StatusCode::BAD_REQUEST, err.to_string()),
            Self::Validation(violations) => {
                envelope(StatusCode::BAD_REQUEST, violations.join(", "))
            }
            Self::NotFound(msg) => envelope(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => envelope(StatusCode::BAD_REQUEST, msg),
            Self::Conflict(msg) => envelope(StatusCode::CONFLICT, msg),
            Self::NotImplemented(what) => envelope(
                StatusCode::NOT_IMPLEMENTED,
                format!("{} is not implemented", what),
            ),
            Self::DbErr(err) => db_error_response(err),
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                envelope(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Maps SeaORM errors onto the sentinel statuses the API promises: record
/// not found → 404, unique violation → 409, foreign-key violation → 400.
/// Raw database error text never reaches the client.
fn db_error_response(err: DbErr) -> Response {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => envelope(StatusCode::CONFLICT, "conflict"),
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            envelope(StatusCode::BAD_REQUEST, "invalid reference")
        }
        _ => match err {
            DbErr::RecordNotFound(_) => envelope(StatusCode::NOT_FOUND, "not found"),
            err => InternalServerError(err).into_response(),
        },
    }
}

/// Wrapper for converting any displayable error into a 500 response.
///
/// Logs the full error message for debugging, but returns a generic message
/// so implementation details never leak to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        envelope(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
