use sea_orm::DatabaseConnection;

use crate::server::{
    data::vacancy::VacancyRepository,
    error::AppError,
    model::vacancy::{CreateVacancyParams, UpdateVacancyParams},
};

pub struct VacancyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VacancyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateVacancyParams,
    ) -> Result<entity::vacancy::Model, AppError> {
        let repo = VacancyRepository::new(self.db);

        let vacancy = repo.create(params).await?;

        Ok(vacancy)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::vacancy::Model>, AppError> {
        let repo = VacancyRepository::new(self.db);

        let vacancy = repo.get_by_id(id).await?;

        Ok(vacancy)
    }

    pub async fn get_paginated(
        &self,
        open_filter: Option<bool>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::vacancy::Model>, u64), AppError> {
        let repo = VacancyRepository::new(self.db);

        let vacancies = repo.get_paginated(open_filter, page, per_page).await?;

        Ok(vacancies)
    }

    pub async fn update(
        &self,
        params: UpdateVacancyParams,
    ) -> Result<Option<entity::vacancy::Model>, AppError> {
        let repo = VacancyRepository::new(self.db);

        let vacancy = repo.update(params).await?;

        Ok(vacancy)
    }

    /// Closes an open vacancy. Closing twice is an invalid state transition
    /// and conflicts rather than silently succeeding.
    pub async fn close(&self, id: i32) -> Result<entity::vacancy::Model, AppError> {
        let repo = VacancyRepository::new(self.db);

        let Some(vacancy) = repo.get_by_id(id).await? else {
            return Err(AppError::NotFound("Vacancy not found".to_string()));
        };

        if !vacancy.open {
            return Err(AppError::Conflict("vacancy is already closed".to_string()));
        }

        let closed = repo
            .close(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vacancy not found".to_string()))?;

        Ok(closed)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = VacancyRepository::new(self.db);

        let deleted = repo.delete(id).await?;

        Ok(deleted)
    }
}
