use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Raw reading from a field device on the generic ingestion path.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReadingDto {
    /// Reference water level baseline, same units as the derived level.
    pub indicator_level: f64,
    /// Loop current, nominally 4-20 mA.
    pub current: f64,
    /// RTD element resistance in ohms.
    pub resistance: f64,
    pub time: Option<DateTime<Utc>>,
}

/// Raw reading on the fixed Andijan site path; the resource id is implied.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AndijanReadingDto {
    pub indicator_level: f64,
    pub current: f64,
    pub resistance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MeasurementDto {
    pub id: i32,
    pub res_id: i64,
    pub level: f64,
    pub temperature: f64,
    pub measured_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MeasurementsDto {
    pub measurements: Vec<MeasurementDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}
