//! Employee factory for creating test employee entities.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test employees with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::employee::EmployeeFactory;
///
/// let employee = EmployeeFactory::new(&db)
///     .full_name("Ana Karimova")
///     .department("Engineering")
///     .build()
///     .await?;
/// ```
pub struct EmployeeFactory<'a> {
    db: &'a DatabaseConnection,
    full_name: String,
    position: String,
    department: String,
    email: String,
    active: bool,
}

impl<'a> EmployeeFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - full_name: `"Employee {id}"`
    /// - position: `"Specialist"`
    /// - department: `"Operations"`
    /// - email: `"employee{id}@example.com"` (unique per factory call)
    /// - active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            full_name: format!("Employee {}", id),
            position: "Specialist".to_string(),
            department: "Operations".to_string(),
            email: format!("employee{}@example.com", id),
            active: true,
        }
    }

    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    pub fn position(mut self, position: impl Into<String>) -> Self {
        self.position = position.into();
        self
    }

    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the employee entity into the database.
    pub async fn build(self) -> Result<entity::employee::Model, DbErr> {
        entity::employee::ActiveModel {
            full_name: ActiveValue::Set(self.full_name),
            position: ActiveValue::Set(self.position),
            department: ActiveValue::Set(self.department),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(None),
            hired_on: ActiveValue::Set(
                NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date"),
            ),
            active: ActiveValue::Set(self.active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an employee with default values.
pub async fn create_employee(db: &DatabaseConnection) -> Result<entity::employee::Model, DbErr> {
    EmployeeFactory::new(db).build().await
}
