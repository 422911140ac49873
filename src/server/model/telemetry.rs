use chrono::{DateTime, Utc};

use crate::{
    model::telemetry::{AndijanReadingDto, MeasurementDto, ReadingDto},
    server::validate::Validate,
};

#[derive(Debug, Clone)]
pub struct StoreMeasurementParams {
    pub res_id: i64,
    pub level: f64,
    pub temperature: f64,
    pub measured_at: DateTime<Utc>,
}

impl From<entity::measurement::Model> for MeasurementDto {
    fn from(model: entity::measurement::Model) -> Self {
        Self {
            id: model.id,
            res_id: model.res_id,
            level: model.level,
            temperature: model.temperature,
            measured_at: model.measured_at,
        }
    }
}

// A dead RTD element reads zero; everything else is left to the converter,
// which owns the numeric policy.
fn validate_reading(resistance: f64) -> Vec<String> {
    let mut violations = Vec::new();
    if resistance <= 0.0 {
        violations.push("field 'resistance' is not valid".to_string());
    }
    violations
}

impl Validate for ReadingDto {
    fn validate(&self) -> Vec<String> {
        validate_reading(self.resistance)
    }
}

impl Validate for AndijanReadingDto {
    fn validate(&self) -> Vec<String> {
        validate_reading(self.resistance)
    }
}
