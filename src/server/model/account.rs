use crate::{
    model::account::{AccountDto, CreateAccountDto, LoginDto},
    server::validate::{self, Validate},
};

#[derive(Debug, Clone)]
pub struct CreateAccountParams {
    pub username: String,
    pub admin: bool,
    pub employee_id: Option<i32>,
}

impl CreateAccountParams {
    pub fn from_dto(dto: CreateAccountDto) -> Self {
        Self {
            username: dto.username,
            admin: dto.admin,
            employee_id: dto.employee_id,
        }
    }
}

impl From<entity::account::Model> for AccountDto {
    fn from(model: entity::account::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            admin: model.admin,
            employee_id: model.employee_id,
            created_at: model.created_at,
        }
    }
}

impl Validate for CreateAccountDto {
    fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();
        validate::required("username", &self.username, &mut violations);
        validate::min_len("username", &self.username, 3, &mut violations);
        violations
    }
}

impl Validate for LoginDto {
    fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();
        validate::required("username", &self.username, &mut violations);
        validate::required("code", &self.code, &mut violations);
        violations
    }
}
