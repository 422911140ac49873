use std::collections::HashMap;

use chrono::{NaiveTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::access_log::AccessLogRepository, error::AppError,
    model::access_log::CreateAccessLogParams,
};

pub struct AccessLogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccessLogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn record(
        &self,
        params: CreateAccessLogParams,
    ) -> Result<entity::access_log::Model, AppError> {
        let repo = AccessLogRepository::new(self.db);

        let log = repo.create(params).await?;

        Ok(log)
    }

    pub async fn get_by_employee(
        &self,
        employee_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::access_log::Model>, u64), AppError> {
        let repo = AccessLogRepository::new(self.db);

        let logs = repo.get_by_employee(employee_id, page, per_page).await?;

        Ok(logs)
    }

    /// Employees currently on the premises: those whose last swipe today was
    /// inbound.
    pub async fn present_today(&self) -> Result<Vec<i32>, AppError> {
        let repo = AccessLogRepository::new(self.db);

        let midnight = Utc::now().date_naive().and_time(NaiveTime::MIN).and_utc();
        let logs = repo.get_since(midnight).await?;

        let mut last_direction: HashMap<i32, String> = HashMap::new();
        for log in logs {
            last_direction.insert(log.employee_id, log.direction);
        }

        let mut present: Vec<i32> = last_direction
            .into_iter()
            .filter(|(_, direction)| direction == "in")
            .map(|(employee_id, _)| employee_id)
            .collect();
        present.sort_unstable();

        Ok(present)
    }
}
