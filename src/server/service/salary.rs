use sea_orm::DatabaseConnection;

use crate::server::{
    data::salary::SalaryRepository, error::AppError, model::salary::SetSalaryParams,
};

pub struct SalaryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SalaryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a new salary row for the employee; the latest `effective_from`
    /// wins as the current salary.
    pub async fn set(&self, params: SetSalaryParams) -> Result<entity::salary::Model, AppError> {
        let repo = SalaryRepository::new(self.db);

        let salary = repo.insert(params).await?;

        Ok(salary)
    }

    pub async fn current(&self, employee_id: i32) -> Result<Option<entity::salary::Model>, AppError> {
        let repo = SalaryRepository::new(self.db);

        let salary = repo.current_for_employee(employee_id).await?;

        Ok(salary)
    }

    pub async fn history(&self, employee_id: i32) -> Result<Vec<entity::salary::Model>, AppError> {
        let repo = SalaryRepository::new(self.db);

        let salaries = repo.history_for_employee(employee_id).await?;

        Ok(salaries)
    }
}
