use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::salary::SalaryDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmployeeDto {
    pub id: i32,
    pub full_name: String,
    pub position: String,
    pub department: String,
    pub email: String,
    pub phone: Option<String>,
    pub hired_on: NaiveDate,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateEmployeeDto {
    pub full_name: String,
    pub position: String,
    pub department: String,
    pub email: String,
    pub phone: Option<String>,
    pub hired_on: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateEmployeeDto {
    pub full_name: String,
    pub position: String,
    pub department: String,
    pub email: String,
    pub phone: Option<String>,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedEmployeesDto {
    pub employees: Vec<EmployeeDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Employee card enriched with data from secondary lookups. Both extras are
/// optional: when a lookup fails the field is omitted and the rest of the
/// profile is still served.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EmployeeProfileDto {
    pub employee: EmployeeDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unread_notifications: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<SalaryDto>,
}
