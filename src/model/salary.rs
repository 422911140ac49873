use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SalaryDto {
    pub id: i32,
    pub employee_id: i32,
    /// Amount in minor currency units.
    pub amount: i64,
    pub currency: String,
    pub effective_from: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SetSalaryDto {
    pub amount: i64,
    pub currency: String,
    pub effective_from: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SalaryHistoryDto {
    pub salaries: Vec<SalaryDto>,
}
