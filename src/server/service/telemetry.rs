pub mod convert;

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::measurement::MeasurementRepository, error::AppError,
    model::telemetry::StoreMeasurementParams,
};

pub struct TelemetryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TelemetryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Converts a raw reading and persists the derived measurement.
    ///
    /// Conversion runs first; an unsupported reservoir id fails the request
    /// before anything is written, so no partial result is ever persisted.
    pub async fn ingest(
        &self,
        res_id: i64,
        indicator_level: f64,
        current: f64,
        resistance: f64,
        time: Option<DateTime<Utc>>,
    ) -> Result<entity::measurement::Model, AppError> {
        let derived = convert::convert(res_id, indicator_level, current, resistance)?;

        let repo = MeasurementRepository::new(self.db);

        let measurement = repo
            .create(StoreMeasurementParams {
                res_id: derived.res_id,
                level: derived.level,
                temperature: derived.temperature,
                measured_at: time.unwrap_or_else(Utc::now),
            })
            .await?;

        Ok(measurement)
    }

    pub async fn get_measurements(
        &self,
        res_id: i64,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::measurement::Model>, u64), AppError> {
        let repo = MeasurementRepository::new(self.db);

        let measurements = repo
            .get_for_resource(res_id, from, to, page, per_page)
            .await?;

        Ok(measurements)
    }
}
