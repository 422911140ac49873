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
        vacation::{
            CreateVacationRequestDto, SetVacationBalanceDto, VacationBalanceDto,
            VacationRequestDto, VacationRequestsDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::vacation::CreateVacationRequestParams,
        service::vacation::VacationService,
        state::AppState,
        validate::ValidatedJson,
    },
};

/// GET /api/employees/{id}/vacation/{year} - Get a yearly vacation balance
pub async fn get_vacation_balance(
    State(state): State<AppState>,
    session: Session,
    Path((employee_id, year)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = VacationService::new(&state.db);

    let balance = service.get_balance(employee_id, year).await?;

    match balance {
        Some(balance) => Ok((
            StatusCode::OK,
            Json(Payload::ok(VacationBalanceDto::from(balance))),
        )),
        None => Err(AppError::NotFound("Vacation balance not found".to_string())),
    }
}

/// PUT /api/employees/{id}/vacation - Set a yearly balance (admin only)
///
/// Creates the balance row or adjusts the total; days already used are
/// preserved.
pub async fn set_vacation_balance(
    State(state): State<AppState>,
    session: Session,
    Path(employee_id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<SetVacationBalanceDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = VacationService::new(&state.db);

    let balance = service
        .set_balance(employee_id, payload.year, payload.days_total)
        .await?;

    Ok((
        StatusCode::OK,
        Json(Payload::ok(VacationBalanceDto::from(balance))),
    ))
}

/// POST /api/vacation/requests - File a vacation request
///
/// The request is filed for the employee linked to the logged-in account;
/// accounts without a linked employee cannot take vacation.
pub async fn add_vacation_request(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<CreateVacationRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let account = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let Some(employee_id) = account.employee_id else {
        return Err(AppError::BadRequest(
            "account has no linked employee".to_string(),
        ));
    };

    let service = VacationService::new(&state.db);

    let request = service
        .create_request(CreateVacationRequestParams::from_dto(employee_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(CreatedDto::new(request.id))))
}

/// POST /api/vacation/requests/{id}/approve - Approve a request (admin only)
///
/// Books the requested days against the balance; only pending requests can
/// be approved.
pub async fn approve_vacation_request(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = VacationService::new(&state.db);

    let request = service.approve_request(id).await?;

    Ok((
        StatusCode::OK,
        Json(Payload::ok(VacationRequestDto::from(request))),
    ))
}

/// POST /api/vacation/requests/{id}/reject - Reject a request (admin only)
pub async fn reject_vacation_request(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = VacationService::new(&state.db);

    let request = service.reject_request(id).await?;

    Ok((
        StatusCode::OK,
        Json(Payload::ok(VacationRequestDto::from(request))),
    ))
}

/// GET /api/employees/{id}/vacation/requests - List an employee's requests
pub async fn get_vacation_requests(
    State(state): State<AppState>,
    session: Session,
    Path(employee_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = VacationService::new(&state.db);

    let requests = service.requests_for_employee(employee_id).await?;

    Ok((
        StatusCode::OK,
        Json(Payload::ok(VacationRequestsDto {
            requests: requests.into_iter().map(VacationRequestDto::from).collect(),
        })),
    ))
}
