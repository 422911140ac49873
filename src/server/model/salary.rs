use chrono::{DateTime, Utc};

use crate::{
    model::salary::{SalaryDto, SetSalaryDto},
    server::validate::{self, Validate},
};

#[derive(Debug, Clone)]
pub struct SetSalaryParams {
    pub employee_id: i32,
    pub amount: i64,
    pub currency: String,
    pub effective_from: DateTime<Utc>,
}

impl SetSalaryParams {
    pub fn from_dto(employee_id: i32, dto: SetSalaryDto) -> Self {
        Self {
            employee_id,
            amount: dto.amount,
            currency: dto.currency,
            effective_from: dto.effective_from.unwrap_or_else(Utc::now),
        }
    }
}

impl From<entity::salary::Model> for SalaryDto {
    fn from(model: entity::salary::Model) -> Self {
        Self {
            id: model.id,
            employee_id: model.employee_id,
            amount: model.amount,
            currency: model.currency,
            effective_from: model.effective_from,
        }
    }
}

impl Validate for SetSalaryDto {
    fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();
        validate::positive("amount", self.amount, &mut violations);
        validate::required("currency", &self.currency, &mut violations);
        validate::min_len("currency", &self.currency, 3, &mut violations);
        violations
    }
}
