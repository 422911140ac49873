use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessLogDto {
    pub id: i32,
    pub employee_id: i32,
    pub card_id: String,
    pub direction: String,
    pub logged_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAccessLogDto {
    pub employee_id: i32,
    pub card_id: String,
    pub direction: String,
    pub logged_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessLogsDto {
    pub logs: Vec<AccessLogDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

/// Employees whose last swipe today was inbound.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresenceDto {
    pub employee_ids: Vec<i32>,
    pub count: usize,
}
