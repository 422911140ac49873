use sea_orm::DatabaseConnection;

use crate::{model::task::ManagerTask, server::{data::task::TaskRepository, error::AppError}};

pub struct TaskService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TaskService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn pending(&self) -> Result<Vec<ManagerTask>, AppError> {
        let repo = TaskRepository::new(self.db);

        let tasks = repo.pending_tasks().await?;

        Ok(tasks)
    }
}
