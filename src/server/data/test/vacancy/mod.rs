use entity::prelude::*;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::vacancy::VacancyRepository,
    model::vacancy::{CreateVacancyParams, UpdateVacancyParams},
};

mod close;
mod create;
mod delete;
mod update;
