use chrono::NaiveDate;
use entity::prelude::*;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::vacation::VacationRepository,
    model::vacation::{CreateVacationRequestParams, VacationRequestStatus},
};

mod balance;
mod requests;

fn request_params(employee_id: i32, days: i32) -> CreateVacationRequestParams {
    CreateVacationRequestParams {
        employee_id,
        year: 2026,
        days,
        starts_on: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
    }
}
