use chrono::{DateTime, Utc};

use crate::{
    model::access_log::{AccessLogDto, CreateAccessLogDto},
    server::validate::{self, Validate},
};

pub const DIRECTIONS: &[&str] = &["in", "out"];

#[derive(Debug, Clone)]
pub struct CreateAccessLogParams {
    pub employee_id: i32,
    pub card_id: String,
    pub direction: String,
    pub logged_at: DateTime<Utc>,
}

impl CreateAccessLogParams {
    pub fn from_dto(dto: CreateAccessLogDto) -> Self {
        Self {
            employee_id: dto.employee_id,
            card_id: dto.card_id,
            direction: dto.direction,
            logged_at: dto.logged_at.unwrap_or_else(Utc::now),
        }
    }
}

impl From<entity::access_log::Model> for AccessLogDto {
    fn from(model: entity::access_log::Model) -> Self {
        Self {
            id: model.id,
            employee_id: model.employee_id,
            card_id: model.card_id,
            direction: model.direction,
            logged_at: model.logged_at,
        }
    }
}

impl Validate for CreateAccessLogDto {
    fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();
        validate::positive("employee_id", self.employee_id as i64, &mut violations);
        validate::required("card_id", &self.card_id, &mut violations);
        validate::one_of("direction", &self.direction, DIRECTIONS, &mut violations);
        violations
    }
}
