use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::vacancy::{CreateVacancyParams, UpdateVacancyParams};

pub struct VacancyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VacancyRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new vacancy in the open state.
    pub async fn create(
        &self,
        params: CreateVacancyParams,
    ) -> Result<entity::vacancy::Model, DbErr> {
        entity::vacancy::ActiveModel {
            title: ActiveValue::Set(params.title),
            department: ActiveValue::Set(params.department),
            description: ActiveValue::Set(params.description),
            open: ActiveValue::Set(true),
            opened_at: ActiveValue::Set(Utc::now()),
            closed_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::vacancy::Model>, DbErr> {
        entity::prelude::Vacancy::find_by_id(id).one(self.db).await
    }

    /// Gets a page of vacancies, optionally restricted to open or closed ones.
    pub async fn get_paginated(
        &self,
        open_filter: Option<bool>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::vacancy::Model>, u64), DbErr> {
        let mut query =
            entity::prelude::Vacancy::find().order_by_asc(entity::vacancy::Column::Title);

        if let Some(open) = open_filter {
            query = query.filter(entity::vacancy::Column::Open.eq(open));
        }

        let paginator = query.paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let vacancies = paginator.fetch_page(page).await?;

        Ok((vacancies, total))
    }

    /// Updates a vacancy; returns `None` when the id does not exist.
    pub async fn update(
        &self,
        params: UpdateVacancyParams,
    ) -> Result<Option<entity::vacancy::Model>, DbErr> {
        let Some(vacancy) = self.get_by_id(params.id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::vacancy::ActiveModel = vacancy.into();
        active_model.title = ActiveValue::Set(params.title);
        active_model.department = ActiveValue::Set(params.department);
        active_model.description = ActiveValue::Set(params.description);

        let updated = active_model.update(self.db).await?;

        Ok(Some(updated))
    }

    /// Marks a vacancy closed; returns `None` when the id does not exist.
    /// Whether the vacancy was still open is the caller's concern.
    pub async fn close(&self, id: i32) -> Result<Option<entity::vacancy::Model>, DbErr> {
        let Some(vacancy) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::vacancy::ActiveModel = vacancy.into();
        active_model.open = ActiveValue::Set(false);
        active_model.closed_at = ActiveValue::Set(Some(Utc::now()));

        let updated = active_model.update(self.db).await?;

        Ok(Some(updated))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Vacancy::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
