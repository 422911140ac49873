use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::kpi::{CreateKpiParams, RecordKpiScoreParams, UpdateKpiParams};

pub struct KpiRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> KpiRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateKpiParams) -> Result<entity::kpi::Model, DbErr> {
        entity::kpi::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            weight: ActiveValue::Set(params.weight),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::kpi::Model>, DbErr> {
        entity::prelude::Kpi::find_by_id(id).one(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::kpi::Model>, DbErr> {
        entity::prelude::Kpi::find()
            .order_by_asc(entity::kpi::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        params: UpdateKpiParams,
    ) -> Result<Option<entity::kpi::Model>, DbErr> {
        let Some(kpi) = self.get_by_id(params.id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::kpi::ActiveModel = kpi.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.description = ActiveValue::Set(params.description);
        active_model.weight = ActiveValue::Set(params.weight);

        let updated = active_model.update(self.db).await?;

        Ok(Some(updated))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Kpi::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}

pub struct KpiScoreRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> KpiScoreRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn record(
        &self,
        params: RecordKpiScoreParams,
    ) -> Result<entity::kpi_score::Model, DbErr> {
        entity::kpi_score::ActiveModel {
            kpi_id: ActiveValue::Set(params.kpi_id),
            employee_id: ActiveValue::Set(params.employee_id),
            period: ActiveValue::Set(params.period),
            score: ActiveValue::Set(params.score),
            recorded_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Whether a score is already recorded for this kpi/employee/period.
    pub async fn exists(
        &self,
        kpi_id: i32,
        employee_id: i32,
        period: &str,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::KpiScore::find()
            .filter(entity::kpi_score::Column::KpiId.eq(kpi_id))
            .filter(entity::kpi_score::Column::EmployeeId.eq(employee_id))
            .filter(entity::kpi_score::Column::Period.eq(period))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets an employee's scores together with the indicator definitions.
    pub async fn get_by_employee(
        &self,
        employee_id: i32,
    ) -> Result<Vec<(entity::kpi_score::Model, Option<entity::kpi::Model>)>, DbErr> {
        entity::prelude::KpiScore::find()
            .find_also_related(entity::prelude::Kpi)
            .filter(entity::kpi_score::Column::EmployeeId.eq(employee_id))
            .order_by_desc(entity::kpi_score::Column::Period)
            .all(self.db)
            .await
    }
}
