use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Minimal response envelope carried by every response body: the HTTP status
/// repeated as an integer, plus error text when there is any.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatusDto {
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StatusDto {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status: status.as_u16(),
            error: None,
        }
    }

    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            error: Some(message.into()),
        }
    }
}

/// Envelope for successful creates: `{"status":201,"id":<new id>}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatedDto {
    pub status: u16,
    pub id: i32,
}

impl CreatedDto {
    pub fn new(id: i32) -> Self {
        Self {
            status: StatusCode::CREATED.as_u16(),
            id,
        }
    }
}

/// Envelope for successful reads/updates: the domain payload flattened next
/// to the `status` field.
#[derive(Debug, Clone, Serialize)]
pub struct Payload<T: Serialize> {
    pub status: u16,
    #[serde(flatten)]
    pub body: T,
}

impl<T: Serialize> Payload<T> {
    pub fn ok(body: T) -> Self {
        Self {
            status: StatusCode::OK.as_u16(),
            body,
        }
    }

    pub fn created(body: T) -> Self {
        Self {
            status: StatusCode::CREATED.as_u16(),
            body,
        }
    }
}
