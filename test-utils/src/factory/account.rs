use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test accounts.
pub struct AccountFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    access_code: String,
    admin: bool,
    employee_id: Option<i32>,
}

impl<'a> AccountFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("account{}", id),
            access_code: format!("code-{}", id),
            admin: false,
            employee_id: None,
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn access_code(mut self, access_code: impl Into<String>) -> Self {
        self.access_code = access_code.into();
        self
    }

    pub fn admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    pub fn employee_id(mut self, employee_id: i32) -> Self {
        self.employee_id = Some(employee_id);
        self
    }

    pub async fn build(self) -> Result<entity::account::Model, DbErr> {
        entity::account::ActiveModel {
            username: ActiveValue::Set(self.username),
            access_code: ActiveValue::Set(self.access_code),
            admin: ActiveValue::Set(self.admin),
            employee_id: ActiveValue::Set(self.employee_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a regular account with default values.
pub async fn create_account(db: &DatabaseConnection) -> Result<entity::account::Model, DbErr> {
    AccountFactory::new(db).build().await
}

/// Creates an admin account with default values.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::account::Model, DbErr> {
    AccountFactory::new(db).admin(true).build().await
}
