use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{CreatedDto, Payload},
        salary::{SalaryDto, SalaryHistoryDto, SetSalaryDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::salary::SetSalaryParams,
        service::salary::SalaryService,
        state::AppState,
        validate::ValidatedJson,
    },
};

/// POST /api/employees/{id}/salary - Set an employee's salary (admin only)
///
/// Appends a new salary row; the previous rows remain as history. An
/// unknown employee id is an invalid reference.
pub async fn set_salary(
    State(state): State<AppState>,
    session: Session,
    Path(employee_id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<SetSalaryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = SalaryService::new(&state.db);

    let salary = service
        .set(SetSalaryParams::from_dto(employee_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(CreatedDto::new(salary.id))))
}

/// GET /api/employees/{id}/salary - Get an employee's current salary
pub async fn get_current_salary(
    State(state): State<AppState>,
    session: Session,
    Path(employee_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = SalaryService::new(&state.db);

    let salary = service.current(employee_id).await?;

    match salary {
        Some(salary) => Ok((StatusCode::OK, Json(Payload::ok(SalaryDto::from(salary))))),
        None => Err(AppError::NotFound("Salary not found".to_string())),
    }
}

/// GET /api/employees/{id}/salary/history - Get an employee's salary history
pub async fn get_salary_history(
    State(state): State<AppState>,
    session: Session,
    Path(employee_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = SalaryService::new(&state.db);

    let salaries = service.history(employee_id).await?;

    Ok((
        StatusCode::OK,
        Json(Payload::ok(SalaryHistoryDto {
            salaries: salaries.into_iter().map(SalaryDto::from).collect(),
        })),
    ))
}
