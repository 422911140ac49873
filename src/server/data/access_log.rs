use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::access_log::CreateAccessLogParams;

pub struct AccessLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccessLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateAccessLogParams,
    ) -> Result<entity::access_log::Model, DbErr> {
        entity::access_log::ActiveModel {
            employee_id: ActiveValue::Set(params.employee_id),
            card_id: ActiveValue::Set(params.card_id),
            direction: ActiveValue::Set(params.direction),
            logged_at: ActiveValue::Set(params.logged_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_employee(
        &self,
        employee_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::access_log::Model>, u64), DbErr> {
        let paginator = entity::prelude::AccessLog::find()
            .filter(entity::access_log::Column::EmployeeId.eq(employee_id))
            .order_by_desc(entity::access_log::Column::LoggedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let logs = paginator.fetch_page(page).await?;

        Ok((logs, total))
    }

    /// All swipes at or after the given instant, oldest first, for the
    /// presence fold.
    pub async fn get_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<entity::access_log::Model>, DbErr> {
        entity::prelude::AccessLog::find()
            .filter(entity::access_log::Column::LoggedAt.gte(since))
            .order_by_asc(entity::access_log::Column::LoggedAt)
            .all(self.db)
            .await
    }
}
