use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add entity tables with `with_table()` in dependency order (referencing
/// tables after the tables they reference), then call `build()` to get a
/// context with an in-memory SQLite database.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables needed for employee-centric tests: employees plus
    /// the entities hanging off them (accounts, notifications, salaries,
    /// documents).
    pub fn with_employee_tables(self) -> Self {
        self.with_table(Employee)
            .with_table(Account)
            .with_table(Notification)
            .with_table(Salary)
            .with_table(Document)
    }

    /// Adds the tables needed for recruiting tests.
    pub fn with_recruiting_tables(self) -> Self {
        self.with_table(Vacancy).with_table(Candidate)
    }

    /// Adds the tables needed for vacation bookkeeping tests.
    pub fn with_vacation_tables(self) -> Self {
        self.with_table(Employee)
            .with_table(VacationBalance)
            .with_table(VacationRequest)
    }

    /// Adds every table the application knows, for router-level tests.
    pub fn with_all_tables(self) -> Self {
        self.with_employee_tables()
            .with_recruiting_tables()
            .with_table(VacationBalance)
            .with_table(VacationRequest)
            .with_table(Kpi)
            .with_table(KpiScore)
            .with_table(AccessLog)
            .with_table(Investment)
            .with_table(Measurement)
    }

    /// Creates the configured test context and applies the schema.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();

        context.with_tables(self.tables).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
