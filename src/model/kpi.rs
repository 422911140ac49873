use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub weight: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateKpiDto {
    pub name: String,
    pub description: String,
    pub weight: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateKpiDto {
    pub name: String,
    pub description: String,
    pub weight: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KpisDto {
    pub kpis: Vec<KpiDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiScoreDto {
    pub id: i32,
    pub kpi_id: i32,
    pub kpi_name: Option<String>,
    pub employee_id: i32,
    pub period: String,
    pub score: i32,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordKpiScoreDto {
    pub kpi_id: i32,
    pub period: String,
    pub score: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KpiScoresDto {
    pub scores: Vec<KpiScoreDto>,
}
