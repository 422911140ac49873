use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VacationBalanceDto {
    pub employee_id: i32,
    pub year: i32,
    pub days_total: i32,
    pub days_used: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetVacationBalanceDto {
    pub year: i32,
    pub days_total: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VacationRequestDto {
    pub id: i32,
    pub employee_id: i32,
    pub year: i32,
    pub days: i32,
    pub starts_on: NaiveDate,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub decided_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVacationRequestDto {
    pub year: i32,
    pub days: i32,
    pub starts_on: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacationRequestsDto {
    pub requests: Vec<VacationRequestDto>,
}
