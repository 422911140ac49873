use sea_orm::DatabaseConnection;

use crate::server::{
    data::candidate::CandidateRepository,
    error::AppError,
    model::candidate::{CandidateStatus, CreateCandidateParams, UpdateCandidateParams},
};

pub struct CandidateService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CandidateService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateCandidateParams,
    ) -> Result<entity::candidate::Model, AppError> {
        let repo = CandidateRepository::new(self.db);

        let candidate = repo.create(params).await?;

        Ok(candidate)
    }

    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<(entity::candidate::Model, Option<entity::vacancy::Model>)>, AppError> {
        let repo = CandidateRepository::new(self.db);

        let candidate = repo.get_by_id(id).await?;

        Ok(candidate)
    }

    pub async fn get_by_vacancy(
        &self,
        vacancy_id: i32,
    ) -> Result<Vec<entity::candidate::Model>, AppError> {
        let repo = CandidateRepository::new(self.db);

        let candidates = repo.get_by_vacancy(vacancy_id).await?;

        Ok(candidates)
    }

    pub async fn update(
        &self,
        params: UpdateCandidateParams,
    ) -> Result<Option<entity::candidate::Model>, AppError> {
        let repo = CandidateRepository::new(self.db);

        let candidate = repo.update(params).await?;

        Ok(candidate)
    }

    /// Moves a candidate through the hiring pipeline. Illegal transitions
    /// conflict; the stored status never ends up outside the known set.
    pub async fn change_status(
        &self,
        id: i32,
        new_status: &str,
    ) -> Result<entity::candidate::Model, AppError> {
        let repo = CandidateRepository::new(self.db);

        let Some((candidate, _)) = repo.get_by_id(id).await? else {
            return Err(AppError::NotFound("Candidate not found".to_string()));
        };

        let current = CandidateStatus::parse(&candidate.status).ok_or_else(|| {
            AppError::InternalError(format!(
                "candidate {} carries unknown status '{}'",
                candidate.id, candidate.status
            ))
        })?;

        let target = CandidateStatus::parse(new_status)
            .ok_or_else(|| AppError::BadRequest("field 'status' is not valid".to_string()))?;

        if !current.can_transition(target) {
            return Err(AppError::Conflict(format!(
                "cannot move candidate from '{}' to '{}'",
                current.as_str(),
                target.as_str()
            )));
        }

        let updated = repo
            .update_status(id, target)
            .await?
            .ok_or_else(|| AppError::NotFound("Candidate not found".to_string()))?;

        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = CandidateRepository::new(self.db);

        let deleted = repo.delete(id).await?;

        Ok(deleted)
    }
}
