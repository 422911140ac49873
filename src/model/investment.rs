use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentDto {
    pub id: i32,
    pub name: String,
    pub partner: String,
    pub amount: i64,
    pub stage: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInvestmentDto {
    pub name: String,
    pub partner: String,
    pub amount: i64,
    pub stage: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateInvestmentDto {
    pub name: String,
    pub partner: String,
    pub amount: i64,
    pub stage: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentsDto {
    pub investments: Vec<InvestmentDto>,
}
