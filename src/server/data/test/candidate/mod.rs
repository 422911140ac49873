use entity::prelude::*;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::candidate::CandidateRepository,
    model::candidate::{CandidateStatus, CreateCandidateParams},
};

mod create;
mod update_status;

fn create_params(vacancy_id: i32) -> CreateCandidateParams {
    CreateCandidateParams {
        vacancy_id,
        full_name: "Bobur Aliyev".to_string(),
        email: "bobur@example.com".to_string(),
        phone: None,
    }
}
