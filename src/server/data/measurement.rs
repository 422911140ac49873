use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::telemetry::StoreMeasurementParams;

pub struct MeasurementRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MeasurementRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Persists a derived measurement.
    pub async fn create(
        &self,
        params: StoreMeasurementParams,
    ) -> Result<entity::measurement::Model, DbErr> {
        entity::measurement::ActiveModel {
            res_id: ActiveValue::Set(params.res_id),
            level: ActiveValue::Set(params.level),
            temperature: ActiveValue::Set(params.temperature),
            measured_at: ActiveValue::Set(params.measured_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a page of measurements for one resource, newest first, with
    /// optional time bounds.
    pub async fn get_for_resource(
        &self,
        res_id: i64,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::measurement::Model>, u64), DbErr> {
        let mut query = entity::prelude::Measurement::find()
            .filter(entity::measurement::Column::ResId.eq(res_id))
            .order_by_desc(entity::measurement::Column::MeasuredAt);

        if let Some(from) = from {
            query = query.filter(entity::measurement::Column::MeasuredAt.gte(from));
        }

        if let Some(to) = to {
            query = query.filter(entity::measurement::Column::MeasuredAt.lte(to));
        }

        let paginator = query.paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let measurements = paginator.fetch_page(page).await?;

        Ok((measurements, total))
    }
}
