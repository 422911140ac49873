use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::StatusDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user id in the session. Results in 401.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// Session carries a user id that no longer exists in the database.
    /// Results in 401; the stale session cannot be trusted.
    #[error("Account {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Supplied username/access-code pair did not match. Results in 401.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Authenticated but lacking the required permission. Results in 403.
    ///
    /// # Fields
    /// - Account id of the requester
    /// - Server-side description of the denied action
    #[error("Account {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Maps authentication errors to responses: missing or stale identity and
/// bad credentials → 401, permission failures → 403. Client-facing messages
/// stay generic; the details are in the error itself for server-side logs.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) | Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(StatusDto::error(StatusCode::UNAUTHORIZED, "unauthorized")),
            )
                .into_response(),
            Self::AccessDenied(account_id, reason) => {
                tracing::debug!("Account {} denied access: {}", account_id, reason);
                (
                    StatusCode::FORBIDDEN,
                    Json(StatusDto::error(StatusCode::FORBIDDEN, "forbidden")),
                )
                    .into_response()
            }
        }
    }
}
