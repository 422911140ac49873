use sea_orm::DatabaseConnection;

use crate::server::{
    data::kpi::{KpiRepository, KpiScoreRepository},
    error::AppError,
    model::kpi::{CreateKpiParams, RecordKpiScoreParams, UpdateKpiParams},
};

pub struct KpiService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> KpiService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateKpiParams) -> Result<entity::kpi::Model, AppError> {
        let repo = KpiRepository::new(self.db);

        let kpi = repo.create(params).await?;

        Ok(kpi)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::kpi::Model>, AppError> {
        let repo = KpiRepository::new(self.db);

        let kpi = repo.get_by_id(id).await?;

        Ok(kpi)
    }

    pub async fn get_all(&self) -> Result<Vec<entity::kpi::Model>, AppError> {
        let repo = KpiRepository::new(self.db);

        let kpis = repo.get_all().await?;

        Ok(kpis)
    }

    pub async fn update(
        &self,
        params: UpdateKpiParams,
    ) -> Result<Option<entity::kpi::Model>, AppError> {
        let repo = KpiRepository::new(self.db);

        let kpi = repo.update(params).await?;

        Ok(kpi)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = KpiRepository::new(self.db);

        let deleted = repo.delete(id).await?;

        Ok(deleted)
    }

    /// Records a score; one score per kpi/employee/period.
    pub async fn record_score(
        &self,
        params: RecordKpiScoreParams,
    ) -> Result<entity::kpi_score::Model, AppError> {
        let repo = KpiScoreRepository::new(self.db);

        if repo
            .exists(params.kpi_id, params.employee_id, &params.period)
            .await?
        {
            return Err(AppError::Conflict(
                "score already recorded for this period".to_string(),
            ));
        }

        let score = repo.record(params).await?;

        Ok(score)
    }

    pub async fn scores_for_employee(
        &self,
        employee_id: i32,
    ) -> Result<Vec<(entity::kpi_score::Model, Option<entity::kpi::Model>)>, AppError> {
        let repo = KpiScoreRepository::new(self.db);

        let scores = repo.get_by_employee(employee_id).await?;

        Ok(scores)
    }
}
