use sea_orm::DatabaseConnection;

use crate::server::{
    data::vacation::VacationRepository,
    error::AppError,
    model::vacation::{CreateVacationRequestParams, VacationRequestStatus},
};

pub struct VacationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VacationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_balance(
        &self,
        employee_id: i32,
        year: i32,
    ) -> Result<Option<entity::vacation_balance::Model>, AppError> {
        let repo = VacationRepository::new(self.db);

        let balance = repo.get_balance(employee_id, year).await?;

        Ok(balance)
    }

    pub async fn set_balance(
        &self,
        employee_id: i32,
        year: i32,
        days_total: i32,
    ) -> Result<entity::vacation_balance::Model, AppError> {
        let repo = VacationRepository::new(self.db);

        let balance = repo.set_balance(employee_id, year, days_total).await?;

        Ok(balance)
    }

    /// Files a vacation request. The requested days must fit the remaining
    /// balance for that year; days are only booked on approval.
    pub async fn create_request(
        &self,
        params: CreateVacationRequestParams,
    ) -> Result<entity::vacation_request::Model, AppError> {
        let repo = VacationRepository::new(self.db);

        let Some(balance) = repo.get_balance(params.employee_id, params.year).await? else {
            return Err(AppError::BadRequest(
                "no vacation balance for this year".to_string(),
            ));
        };

        let remaining = balance.days_total - balance.days_used;
        if params.days > remaining {
            return Err(AppError::BadRequest(
                "insufficient vacation balance".to_string(),
            ));
        }

        let request = repo.create_request(params).await?;

        Ok(request)
    }

    /// Approves a pending request and books its days against the balance.
    pub async fn approve_request(
        &self,
        id: i32,
    ) -> Result<entity::vacation_request::Model, AppError> {
        let repo = VacationRepository::new(self.db);

        let request = self.pending_request(&repo, id).await?;

        // The balance may have moved since the request was filed.
        let Some(balance) = repo.get_balance(request.employee_id, request.year).await? else {
            return Err(AppError::Conflict(
                "vacation balance no longer exists".to_string(),
            ));
        };

        let remaining = balance.days_total - balance.days_used;
        if request.days > remaining {
            return Err(AppError::Conflict(
                "insufficient vacation balance".to_string(),
            ));
        }

        repo.add_used_days(request.employee_id, request.year, request.days)
            .await?;

        let decided = repo
            .decide_request(id, VacationRequestStatus::Approved)
            .await?
            .ok_or_else(|| AppError::NotFound("Vacation request not found".to_string()))?;

        Ok(decided)
    }

    /// Rejects a pending request; the balance is untouched.
    pub async fn reject_request(
        &self,
        id: i32,
    ) -> Result<entity::vacation_request::Model, AppError> {
        let repo = VacationRepository::new(self.db);

        self.pending_request(&repo, id).await?;

        let decided = repo
            .decide_request(id, VacationRequestStatus::Rejected)
            .await?
            .ok_or_else(|| AppError::NotFound("Vacation request not found".to_string()))?;

        Ok(decided)
    }

    pub async fn requests_for_employee(
        &self,
        employee_id: i32,
    ) -> Result<Vec<entity::vacation_request::Model>, AppError> {
        let repo = VacationRepository::new(self.db);

        let requests = repo.get_requests_for_employee(employee_id).await?;

        Ok(requests)
    }

    async fn pending_request(
        &self,
        repo: &VacationRepository<'_>,
        id: i32,
    ) -> Result<entity::vacation_request::Model, AppError> {
        let Some(request) = repo.get_request(id).await? else {
            return Err(AppError::NotFound("Vacation request not found".to_string()));
        };

        match VacationRequestStatus::parse(&request.status) {
            Some(VacationRequestStatus::Pending) => Ok(request),
            Some(_) => Err(AppError::Conflict(
                "vacation request is already decided".to_string(),
            )),
            None => Err(AppError::InternalError(format!(
                "vacation request {} carries unknown status '{}'",
                request.id, request.status
            ))),
        }
    }
}
