use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        account::AccountRepository, employee::EmployeeRepository,
        notification::NotificationRepository, salary::SalaryRepository,
    },
    error::AppError,
    model::employee::{CreateEmployeeParams, EmployeeProfile, UpdateEmployeeParams},
};

pub struct EmployeeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmployeeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateEmployeeParams,
    ) -> Result<entity::employee::Model, AppError> {
        let repo = EmployeeRepository::new(self.db);

        let employee = repo.create(params).await?;

        Ok(employee)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::employee::Model>, AppError> {
        let repo = EmployeeRepository::new(self.db);

        let employee = repo.get_by_id(id).await?;

        Ok(employee)
    }

    pub async fn get_paginated(
        &self,
        name_filter: Option<String>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::employee::Model>, u64), AppError> {
        let repo = EmployeeRepository::new(self.db);

        let employees = repo.get_paginated(name_filter, page, per_page).await?;

        Ok(employees)
    }

    pub async fn update(
        &self,
        params: UpdateEmployeeParams,
    ) -> Result<Option<entity::employee::Model>, AppError> {
        let repo = EmployeeRepository::new(self.db);

        let employee = repo.update(params).await?;

        Ok(employee)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = EmployeeRepository::new(self.db);

        let deleted = repo.delete(id).await?;

        Ok(deleted)
    }

    /// Builds the profile view: the employee plus unread-notification count
    /// and current salary. The secondary lookups degrade gracefully: a
    /// failure is logged and the profile is served without that field.
    pub async fn get_profile(&self, id: i32) -> Result<Option<EmployeeProfile>, AppError> {
        let Some(employee) = EmployeeRepository::new(self.db).get_by_id(id).await? else {
            return Ok(None);
        };

        let unread_notifications = match self.unread_for_employee(id).await {
            Ok(count) => count,
            Err(err) => {
                tracing::warn!("notification count lookup failed for employee {}: {}", id, err);
                None
            }
        };

        let salary = match SalaryRepository::new(self.db).current_for_employee(id).await {
            Ok(salary) => salary,
            Err(err) => {
                tracing::warn!("salary lookup failed for employee {}: {}", id, err);
                None
            }
        };

        Ok(Some(EmployeeProfile {
            employee,
            unread_notifications,
            salary,
        }))
    }

    async fn unread_for_employee(&self, employee_id: i32) -> Result<Option<u64>, AppError> {
        let Some(account) = AccountRepository::new(self.db)
            .find_by_employee_id(employee_id)
            .await?
        else {
            return Ok(None);
        };

        let count = NotificationRepository::new(self.db)
            .unread_count(account.id)
            .await?;

        Ok(Some(count))
    }
}
