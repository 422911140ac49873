use crate::{
    model::vacancy::{CreateVacancyDto, UpdateVacancyDto, VacancyDto},
    server::validate::{self, Validate},
};

#[derive(Debug, Clone)]
pub struct CreateVacancyParams {
    pub title: String,
    pub department: String,
    pub description: String,
}

impl CreateVacancyParams {
    pub fn from_dto(dto: CreateVacancyDto) -> Self {
        Self {
            title: dto.title,
            department: dto.department,
            description: dto.description,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateVacancyParams {
    pub id: i32,
    pub title: String,
    pub department: String,
    pub description: String,
}

impl UpdateVacancyParams {
    pub fn from_dto(id: i32, dto: UpdateVacancyDto) -> Self {
        Self {
            id,
            title: dto.title,
            department: dto.department,
            description: dto.description,
        }
    }
}

impl From<entity::vacancy::Model> for VacancyDto {
    fn from(model: entity::vacancy::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            department: model.department,
            description: model.description,
            open: model.open,
            opened_at: model.opened_at,
            closed_at: model.closed_at,
        }
    }
}

impl Validate for CreateVacancyDto {
    fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();
        validate::required("title", &self.title, &mut violations);
        validate::min_len("title", &self.title, 3, &mut violations);
        validate::required("department", &self.department, &mut violations);
        validate::required("description", &self.description, &mut violations);
        violations
    }
}

impl Validate for UpdateVacancyDto {
    fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();
        validate::required("title", &self.title, &mut violations);
        validate::min_len("title", &self.title, 3, &mut violations);
        validate::required("department", &self.department, &mut violations);
        validate::required("description", &self.description, &mut violations);
        violations
    }
}
