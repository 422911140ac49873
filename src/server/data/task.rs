use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::{model::task::ManagerTask, server::model::candidate::CandidateStatus};

/// Aggregates pending managerial work from several tables into one typed
/// task list. The task kind is decided here, at the repository boundary,
/// so callers only ever see the `ManagerTask` sum type.
pub struct TaskRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TaskRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All pending tasks: vacation requests waiting for a decision, then
    /// candidates holding an offer.
    pub async fn pending_tasks(&self) -> Result<Vec<ManagerTask>, DbErr> {
        let mut tasks = Vec::new();

        let requests = entity::prelude::VacationRequest::find()
            .filter(entity::vacation_request::Column::Status.eq("pending"))
            .order_by_asc(entity::vacation_request::Column::CreatedAt)
            .all(self.db)
            .await?;

        tasks.extend(requests.into_iter().map(|r| ManagerTask::VacationApproval {
            request_id: r.id,
            employee_id: r.employee_id,
            days: r.days,
            starts_on: r.starts_on,
        }));

        let offered = entity::prelude::Candidate::find()
            .filter(entity::candidate::Column::Status.eq(CandidateStatus::Offered.as_str()))
            .order_by_asc(entity::candidate::Column::AppliedAt)
            .all(self.db)
            .await?;

        tasks.extend(offered.into_iter().map(|c| ManagerTask::CandidateDecision {
            candidate_id: c.id,
            vacancy_id: c.vacancy_id,
            full_name: c.full_name,
        }));

        Ok(tasks)
    }
}
