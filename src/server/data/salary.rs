use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::salary::SetSalaryParams;

/// Salary rows form an append-only history per employee; the row with the
/// latest `effective_from` is the current salary.
pub struct SalaryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SalaryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert(&self, params: SetSalaryParams) -> Result<entity::salary::Model, DbErr> {
        entity::salary::ActiveModel {
            employee_id: ActiveValue::Set(params.employee_id),
            amount: ActiveValue::Set(params.amount),
            currency: ActiveValue::Set(params.currency),
            effective_from: ActiveValue::Set(params.effective_from),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn current_for_employee(
        &self,
        employee_id: i32,
    ) -> Result<Option<entity::salary::Model>, DbErr> {
        entity::prelude::Salary::find()
            .filter(entity::salary::Column::EmployeeId.eq(employee_id))
            .order_by_desc(entity::salary::Column::EffectiveFrom)
            .one(self.db)
            .await
    }

    pub async fn history_for_employee(
        &self,
        employee_id: i32,
    ) -> Result<Vec<entity::salary::Model>, DbErr> {
        entity::prelude::Salary::find()
            .filter(entity::salary::Column::EmployeeId.eq(employee_id))
            .order_by_desc(entity::salary::Column::EffectiveFrom)
            .all(self.db)
            .await
    }
}
