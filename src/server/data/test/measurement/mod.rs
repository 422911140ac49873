use chrono::{Duration, Utc};
use entity::prelude::*;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

use crate::server::{
    data::measurement::MeasurementRepository, model::telemetry::StoreMeasurementParams,
};

mod create;
mod get_for_resource;

fn params(res_id: i64, level: f64) -> StoreMeasurementParams {
    StoreMeasurementParams {
        res_id,
        level,
        temperature: 21.5,
        measured_at: Utc::now(),
    }
}
