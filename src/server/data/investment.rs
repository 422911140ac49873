use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::investment::{CreateInvestmentParams, UpdateInvestmentParams};

pub struct InvestmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InvestmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateInvestmentParams,
    ) -> Result<entity::investment::Model, DbErr> {
        entity::investment::ActiveModel {
            name: ActiveValue::Set(params.name),
            partner: ActiveValue::Set(params.partner),
            amount: ActiveValue::Set(params.amount),
            stage: ActiveValue::Set(params.stage),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::investment::Model>, DbErr> {
        entity::prelude::Investment::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::investment::Model>, DbErr> {
        entity::prelude::Investment::find()
            .order_by_asc(entity::investment::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        params: UpdateInvestmentParams,
    ) -> Result<Option<entity::investment::Model>, DbErr> {
        let Some(investment) = self.get_by_id(params.id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::investment::ActiveModel = investment.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.partner = ActiveValue::Set(params.partner);
        active_model.amount = ActiveValue::Set(params.amount);
        active_model.stage = ActiveValue::Set(params.stage);

        let updated = active_model.update(self.db).await?;

        Ok(Some(updated))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Investment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
