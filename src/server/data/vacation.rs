use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::vacation::{CreateVacationRequestParams, VacationRequestStatus};

pub struct VacationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VacationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_balance(
        &self,
        employee_id: i32,
        year: i32,
    ) -> Result<Option<entity::vacation_balance::Model>, DbErr> {
        entity::prelude::VacationBalance::find()
            .filter(entity::vacation_balance::Column::EmployeeId.eq(employee_id))
            .filter(entity::vacation_balance::Column::Year.eq(year))
            .one(self.db)
            .await
    }

    /// Creates or updates the yearly balance; used days are preserved on
    /// update.
    pub async fn set_balance(
        &self,
        employee_id: i32,
        year: i32,
        days_total: i32,
    ) -> Result<entity::vacation_balance::Model, DbErr> {
        match self.get_balance(employee_id, year).await? {
            Some(balance) => {
                let mut active_model: entity::vacation_balance::ActiveModel = balance.into();
                active_model.days_total = ActiveValue::Set(days_total);
                active_model.update(self.db).await
            }
            None => {
                entity::vacation_balance::ActiveModel {
                    employee_id: ActiveValue::Set(employee_id),
                    year: ActiveValue::Set(year),
                    days_total: ActiveValue::Set(days_total),
                    days_used: ActiveValue::Set(0),
                    ..Default::default()
                }
                .insert(self.db)
                .await
            }
        }
    }

    /// Books days against the yearly balance; `None` when no balance row
    /// exists. Remaining-day arithmetic is the caller's concern.
    pub async fn add_used_days(
        &self,
        employee_id: i32,
        year: i32,
        days: i32,
    ) -> Result<Option<entity::vacation_balance::Model>, DbErr> {
        let Some(balance) = self.get_balance(employee_id, year).await? else {
            return Ok(None);
        };

        let days_used = balance.days_used + days;

        let mut active_model: entity::vacation_balance::ActiveModel = balance.into();
        active_model.days_used = ActiveValue::Set(days_used);

        let updated = active_model.update(self.db).await?;

        Ok(Some(updated))
    }

    pub async fn create_request(
        &self,
        params: CreateVacationRequestParams,
    ) -> Result<entity::vacation_request::Model, DbErr> {
        entity::vacation_request::ActiveModel {
            employee_id: ActiveValue::Set(params.employee_id),
            year: ActiveValue::Set(params.year),
            days: ActiveValue::Set(params.days),
            starts_on: ActiveValue::Set(params.starts_on),
            status: ActiveValue::Set(VacationRequestStatus::Pending.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            decided_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_request(
        &self,
        id: i32,
    ) -> Result<Option<entity::vacation_request::Model>, DbErr> {
        entity::prelude::VacationRequest::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn get_requests_for_employee(
        &self,
        employee_id: i32,
    ) -> Result<Vec<entity::vacation_request::Model>, DbErr> {
        entity::prelude::VacationRequest::find()
            .filter(entity::vacation_request::Column::EmployeeId.eq(employee_id))
            .order_by_desc(entity::vacation_request::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Stamps a decision onto a request; `None` when the id does not exist.
    pub async fn decide_request(
        &self,
        id: i32,
        status: VacationRequestStatus,
    ) -> Result<Option<entity::vacation_request::Model>, DbErr> {
        let Some(request) = self.get_request(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::vacation_request::ActiveModel = request.into();
        active_model.status = ActiveValue::Set(status.as_str().to_string());
        active_model.decided_at = ActiveValue::Set(Some(Utc::now()));

        let updated = active_model.update(self.db).await?;

        Ok(Some(updated))
    }
}
