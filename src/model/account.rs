use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountDto {
    pub id: i32,
    pub username: String,
    pub admin: bool,
    pub employee_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAccountDto {
    pub username: String,
    pub admin: bool,
    pub employee_id: Option<i32>,
}

/// Returned once on account creation; the access code is not retrievable
/// afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedAccountDto {
    pub id: i32,
    pub username: String,
    pub access_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountsDto {
    pub accounts: Vec<AccountDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginDto {
    pub username: String,
    pub code: String,
}
