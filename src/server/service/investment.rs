use sea_orm::DatabaseConnection;

use crate::server::{
    data::investment::InvestmentRepository,
    error::AppError,
    model::investment::{CreateInvestmentParams, UpdateInvestmentParams},
};

pub struct InvestmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InvestmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateInvestmentParams,
    ) -> Result<entity::investment::Model, AppError> {
        let repo = InvestmentRepository::new(self.db);

        let investment = repo.create(params).await?;

        Ok(investment)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::investment::Model>, AppError> {
        let repo = InvestmentRepository::new(self.db);

        let investment = repo.get_by_id(id).await?;

        Ok(investment)
    }

    pub async fn get_all(&self) -> Result<Vec<entity::investment::Model>, AppError> {
        let repo = InvestmentRepository::new(self.db);

        let investments = repo.get_all().await?;

        Ok(investments)
    }

    pub async fn update(
        &self,
        params: UpdateInvestmentParams,
    ) -> Result<Option<entity::investment::Model>, AppError> {
        let repo = InvestmentRepository::new(self.db);

        let investment = repo.update(params).await?;

        Ok(investment)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = InvestmentRepository::new(self.db);

        let deleted = repo.delete(id).await?;

        Ok(deleted)
    }
}
