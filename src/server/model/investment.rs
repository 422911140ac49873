use crate::{
    model::investment::{CreateInvestmentDto, InvestmentDto, UpdateInvestmentDto},
    server::validate::{self, Validate},
};

pub const STAGES: &[&str] = &["proposed", "signed", "active", "completed"];

#[derive(Debug, Clone)]
pub struct CreateInvestmentParams {
    pub name: String,
    pub partner: String,
    pub amount: i64,
    pub stage: String,
}

impl CreateInvestmentParams {
    pub fn from_dto(dto: CreateInvestmentDto) -> Self {
        Self {
            name: dto.name,
            partner: dto.partner,
            amount: dto.amount,
            stage: dto.stage,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateInvestmentParams {
    pub id: i32,
    pub name: String,
    pub partner: String,
    pub amount: i64,
    pub stage: String,
}

impl UpdateInvestmentParams {
    pub fn from_dto(id: i32, dto: UpdateInvestmentDto) -> Self {
        Self {
            id,
            name: dto.name,
            partner: dto.partner,
            amount: dto.amount,
            stage: dto.stage,
        }
    }
}

impl From<entity::investment::Model> for InvestmentDto {
    fn from(model: entity::investment::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            partner: model.partner,
            amount: model.amount,
            stage: model.stage,
            created_at: model.created_at,
        }
    }
}

impl Validate for CreateInvestmentDto {
    fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();
        validate::required("name", &self.name, &mut violations);
        validate::min_len("name", &self.name, 3, &mut violations);
        validate::required("partner", &self.partner, &mut violations);
        validate::positive("amount", self.amount, &mut violations);
        validate::one_of("stage", &self.stage, STAGES, &mut violations);
        violations
    }
}

impl Validate for UpdateInvestmentDto {
    fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();
        validate::required("name", &self.name, &mut violations);
        validate::min_len("name", &self.name, 3, &mut violations);
        validate::required("partner", &self.partner, &mut violations);
        validate::positive("amount", self.amount, &mut violations);
        validate::one_of("stage", &self.stage, STAGES, &mut violations);
        violations
    }
}
