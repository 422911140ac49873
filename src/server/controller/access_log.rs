use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        access_log::{AccessLogDto, AccessLogsDto, CreateAccessLogDto, PresenceDto},
        api::{CreatedDto, Payload},
    },
    server::{
        controller::{per_page, PaginationParams},
        error::AppError,
        middleware::auth::AuthGuard,
        model::access_log::CreateAccessLogParams,
        service::access_log::AccessLogService,
        state::AppState,
        validate::ValidatedJson,
    },
};

/// POST /api/access/logs - Record a card swipe
///
/// Card terminals post here directly, so no session is required. An
/// unknown employee id is an invalid reference.
pub async fn add_access_log(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateAccessLogDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AccessLogService::new(&state.db);

    let log = service
        .record(CreateAccessLogParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(CreatedDto::new(log.id))))
}

/// GET /api/employees/{id}/access-logs - List an employee's swipes
pub async fn get_access_logs(
    State(state): State<AppState>,
    session: Session,
    Path(employee_id): Path<i32>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = AccessLogService::new(&state.db);

    let per_page = per_page(params.entries);
    let (logs, total) = service
        .get_by_employee(employee_id, params.page, per_page)
        .await?;

    Ok((
        StatusCode::OK,
        Json(Payload::ok(AccessLogsDto {
            logs: logs.into_iter().map(AccessLogDto::from).collect(),
            total,
            page: params.page,
            per_page,
        })),
    ))
}

/// GET /api/access/presence - Employees currently on the premises
pub async fn get_presence(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = AccessLogService::new(&state.db);

    let employee_ids = service.present_today().await?;
    let count = employee_ids.len();

    Ok((
        StatusCode::OK,
        Json(Payload::ok(PresenceDto {
            employee_ids,
            count,
        })),
    ))
}
