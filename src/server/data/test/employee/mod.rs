use chrono::NaiveDate;
use entity::prelude::*;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::employee::EmployeeRepository,
    model::employee::{CreateEmployeeParams, UpdateEmployeeParams},
};

mod create;
mod delete;
mod get_by_id;
mod get_paginated;
mod update;

fn create_params(email: &str) -> CreateEmployeeParams {
    CreateEmployeeParams {
        full_name: "Ana Karimova".to_string(),
        position: "Engineer".to_string(),
        department: "Hydrology".to_string(),
        email: email.to_string(),
        phone: Some("+998901234567".to_string()),
        hired_on: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
    }
}
