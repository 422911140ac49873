use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::account::CreateAccountParams;

pub struct AccountRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccountRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an account with the given access code.
    pub async fn create(
        &self,
        params: CreateAccountParams,
        access_code: String,
    ) -> Result<entity::account::Model, DbErr> {
        entity::account::ActiveModel {
            username: ActiveValue::Set(params.username),
            access_code: ActiveValue::Set(access_code),
            admin: ActiveValue::Set(params.admin),
            employee_id: ActiveValue::Set(params.employee_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::account::Model>, DbErr> {
        entity::prelude::Account::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::account::Model>, DbErr> {
        entity::prelude::Account::find()
            .filter(entity::account::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Finds the account linked to an employee, if any.
    pub async fn find_by_employee_id(
        &self,
        employee_id: i32,
    ) -> Result<Option<entity::account::Model>, DbErr> {
        entity::prelude::Account::find()
            .filter(entity::account::Column::EmployeeId.eq(employee_id))
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::account::Model>, DbErr> {
        entity::prelude::Account::find()
            .order_by_asc(entity::account::Column::Username)
            .all(self.db)
            .await
    }

    /// Ids of every account, used for notification fan-out.
    pub async fn all_ids(&self) -> Result<Vec<i32>, DbErr> {
        let accounts = entity::prelude::Account::find().all(self.db).await?;
        Ok(accounts.into_iter().map(|a| a.id).collect())
    }

    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::Account::find()
            .filter(entity::account::Column::Admin.eq(true))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
