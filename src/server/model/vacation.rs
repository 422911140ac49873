use chrono::NaiveDate;

use crate::{
    model::vacation::{
        CreateVacationRequestDto, SetVacationBalanceDto, VacationBalanceDto, VacationRequestDto,
    },
    server::validate::{self, Validate},
};

/// Vacation request states. Only pending requests can be decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VacationRequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl VacationRequestStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateVacationRequestParams {
    pub employee_id: i32,
    pub year: i32,
    pub days: i32,
    pub starts_on: NaiveDate,
}

impl CreateVacationRequestParams {
    pub fn from_dto(employee_id: i32, dto: CreateVacationRequestDto) -> Self {
        Self {
            employee_id,
            year: dto.year,
            days: dto.days,
            starts_on: dto.starts_on,
        }
    }
}

impl From<entity::vacation_balance::Model> for VacationBalanceDto {
    fn from(model: entity::vacation_balance::Model) -> Self {
        Self {
            employee_id: model.employee_id,
            year: model.year,
            days_total: model.days_total,
            days_used: model.days_used,
        }
    }
}

impl From<entity::vacation_request::Model> for VacationRequestDto {
    fn from(model: entity::vacation_request::Model) -> Self {
        Self {
            id: model.id,
            employee_id: model.employee_id,
            year: model.year,
            days: model.days,
            starts_on: model.starts_on,
            status: model.status,
            created_at: model.created_at,
            decided_at: model.decided_at,
        }
    }
}

impl Validate for SetVacationBalanceDto {
    fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();
        validate::in_range("year", self.year as f64, 2000.0, 2100.0, &mut violations);
        validate::in_range(
            "days_total",
            self.days_total as f64,
            0.0,
            365.0,
            &mut violations,
        );
        violations
    }
}

impl Validate for CreateVacationRequestDto {
    fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();
        validate::in_range("year", self.year as f64, 2000.0, 2100.0, &mut violations);
        validate::in_range("days", self.days as f64, 1.0, 365.0, &mut violations);
        violations
    }
}
