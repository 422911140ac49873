use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::employee::{CreateEmployeeParams, UpdateEmployeeParams};

pub struct EmployeeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmployeeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new employee; new hires start active.
    pub async fn create(
        &self,
        params: CreateEmployeeParams,
    ) -> Result<entity::employee::Model, DbErr> {
        entity::employee::ActiveModel {
            full_name: ActiveValue::Set(params.full_name),
            position: ActiveValue::Set(params.position),
            department: ActiveValue::Set(params.department),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            hired_on: ActiveValue::Set(params.hired_on),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::employee::Model>, DbErr> {
        entity::prelude::Employee::find_by_id(id).one(self.db).await
    }

    /// Gets a page of employees, optionally filtered by name substring.
    pub async fn get_paginated(
        &self,
        name_filter: Option<String>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::employee::Model>, u64), DbErr> {
        let mut query = entity::prelude::Employee::find()
            .order_by_asc(entity::employee::Column::FullName);

        if let Some(name) = name_filter {
            query = query.filter(entity::employee::Column::FullName.contains(&name));
        }

        let paginator = query.paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let employees = paginator.fetch_page(page).await?;

        Ok((employees, total))
    }

    /// Updates an employee; returns `None` when the id does not exist.
    pub async fn update(
        &self,
        params: UpdateEmployeeParams,
    ) -> Result<Option<entity::employee::Model>, DbErr> {
        let Some(employee) = self.get_by_id(params.id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::employee::ActiveModel = employee.into();
        active_model.full_name = ActiveValue::Set(params.full_name);
        active_model.position = ActiveValue::Set(params.position);
        active_model.department = ActiveValue::Set(params.department);
        active_model.email = ActiveValue::Set(params.email);
        active_model.phone = ActiveValue::Set(params.phone);
        active_model.active = ActiveValue::Set(params.active);

        let updated = active_model.update(self.db).await?;

        Ok(Some(updated))
    }

    /// Deletes an employee; returns whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Employee::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
