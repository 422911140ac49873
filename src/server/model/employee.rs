use chrono::NaiveDate;

use crate::{
    model::employee::{CreateEmployeeDto, EmployeeDto, EmployeeProfileDto, UpdateEmployeeDto},
    server::validate::{self, Validate},
};

/// Employee card with the results of the secondary profile lookups. Either
/// extra may be absent when its lookup failed or produced nothing.
#[derive(Debug, Clone)]
pub struct EmployeeProfile {
    pub employee: entity::employee::Model,
    pub unread_notifications: Option<u64>,
    pub salary: Option<entity::salary::Model>,
}

impl EmployeeProfile {
    pub fn into_dto(self) -> EmployeeProfileDto {
        EmployeeProfileDto {
            employee: self.employee.into(),
            unread_notifications: self.unread_notifications,
            salary: self.salary.map(Into::into),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateEmployeeParams {
    pub full_name: String,
    pub position: String,
    pub department: String,
    pub email: String,
    pub phone: Option<String>,
    pub hired_on: NaiveDate,
}

impl CreateEmployeeParams {
    pub fn from_dto(dto: CreateEmployeeDto) -> Self {
        Self {
            full_name: dto.full_name,
            position: dto.position,
            department: dto.department,
            email: dto.email,
            phone: dto.phone,
            hired_on: dto.hired_on,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateEmployeeParams {
    pub id: i32,
    pub full_name: String,
    pub position: String,
    pub department: String,
    pub email: String,
    pub phone: Option<String>,
    pub active: bool,
}

impl UpdateEmployeeParams {
    pub fn from_dto(id: i32, dto: UpdateEmployeeDto) -> Self {
        Self {
            id,
            full_name: dto.full_name,
            position: dto.position,
            department: dto.department,
            email: dto.email,
            phone: dto.phone,
            active: dto.active,
        }
    }
}

impl From<entity::employee::Model> for EmployeeDto {
    fn from(model: entity::employee::Model) -> Self {
        Self {
            id: model.id,
            full_name: model.full_name,
            position: model.position,
            department: model.department,
            email: model.email,
            phone: model.phone,
            hired_on: model.hired_on,
            active: model.active,
            created_at: model.created_at,
        }
    }
}

impl Validate for CreateEmployeeDto {
    fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();
        validate::required("full_name", &self.full_name, &mut violations);
        validate::min_len("full_name", &self.full_name, 3, &mut violations);
        validate::required("position", &self.position, &mut violations);
        validate::required("department", &self.department, &mut violations);
        validate::required("email", &self.email, &mut violations);
        validate::email("email", &self.email, &mut violations);
        violations
    }
}

impl Validate for UpdateEmployeeDto {
    fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();
        validate::required("full_name", &self.full_name, &mut violations);
        validate::min_len("full_name", &self.full_name, 3, &mut violations);
        validate::required("position", &self.position, &mut violations);
        validate::required("department", &self.department, &mut violations);
        validate::required("email", &self.email, &mut violations);
        validate::email("email", &self.email, &mut violations);
        violations
    }
}
