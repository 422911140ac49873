use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::candidate::{
    CandidateStatus, CreateCandidateParams, UpdateCandidateParams,
};

pub struct CandidateRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CandidateRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a candidate in the initial `applied` state.
    pub async fn create(
        &self,
        params: CreateCandidateParams,
    ) -> Result<entity::candidate::Model, DbErr> {
        entity::candidate::ActiveModel {
            vacancy_id: ActiveValue::Set(params.vacancy_id),
            full_name: ActiveValue::Set(params.full_name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            status: ActiveValue::Set(CandidateStatus::Applied.as_str().to_string()),
            applied_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a candidate together with the vacancy they applied for.
    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<(entity::candidate::Model, Option<entity::vacancy::Model>)>, DbErr> {
        entity::prelude::Candidate::find_by_id(id)
            .find_also_related(entity::prelude::Vacancy)
            .one(self.db)
            .await
    }

    pub async fn get_by_vacancy(
        &self,
        vacancy_id: i32,
    ) -> Result<Vec<entity::candidate::Model>, DbErr> {
        entity::prelude::Candidate::find()
            .filter(entity::candidate::Column::VacancyId.eq(vacancy_id))
            .order_by_asc(entity::candidate::Column::AppliedAt)
            .all(self.db)
            .await
    }

    /// Updates a candidate's contact fields; returns `None` when the id
    /// does not exist. The pipeline status is only touched through
    /// `update_status`.
    pub async fn update(
        &self,
        params: UpdateCandidateParams,
    ) -> Result<Option<entity::candidate::Model>, DbErr> {
        let Some((candidate, _)) = self.get_by_id(params.id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::candidate::ActiveModel = candidate.into();
        active_model.full_name = ActiveValue::Set(params.full_name);
        active_model.email = ActiveValue::Set(params.email);
        active_model.phone = ActiveValue::Set(params.phone);

        let updated = active_model.update(self.db).await?;

        Ok(Some(updated))
    }

    /// Overwrites a candidate's pipeline status; returns `None` when the id
    /// does not exist. Transition legality is checked by the caller.
    pub async fn update_status(
        &self,
        id: i32,
        status: CandidateStatus,
    ) -> Result<Option<entity::candidate::Model>, DbErr> {
        let Some((candidate, _)) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::candidate::ActiveModel = candidate.into();
        active_model.status = ActiveValue::Set(status.as_str().to_string());

        let updated = active_model.update(self.db).await?;

        Ok(Some(updated))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Candidate::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
