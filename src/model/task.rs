use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A unit of pending managerial work. Each variant carries exactly the data
/// its kind needs; the kind is decided where the rows are read, so handlers
/// never dispatch on loosely typed maps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ManagerTask {
    /// A vacation request waiting for a decision.
    VacationApproval {
        request_id: i32,
        employee_id: i32,
        days: i32,
        starts_on: NaiveDate,
    },
    /// A candidate holding an offer, waiting to be hired or rejected.
    CandidateDecision {
        candidate_id: i32,
        vacancy_id: i32,
        full_name: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TasksDto {
    pub tasks: Vec<ManagerTask>,
}
