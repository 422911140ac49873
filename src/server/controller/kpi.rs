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
        kpi::{CreateKpiDto, KpiDto, KpiScoreDto, KpiScoresDto, KpisDto, RecordKpiScoreDto, UpdateKpiDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::kpi::{CreateKpiParams, RecordKpiScoreParams, UpdateKpiParams},
        service::kpi::KpiService,
        state::AppState,
        validate::ValidatedJson,
    },
};

/// POST /api/kpis - Define a performance indicator (admin only)
pub async fn add_kpi(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<CreateKpiDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = KpiService::new(&state.db);

    let kpi = service.create(CreateKpiParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(CreatedDto::new(kpi.id))))
}

/// GET /api/kpis - List all indicators
pub async fn get_kpis(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = KpiService::new(&state.db);

    let kpis = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(Payload::ok(KpisDto {
            kpis: kpis.into_iter().map(KpiDto::from).collect(),
        })),
    ))
}

/// GET /api/kpis/{id} - Get a specific indicator
pub async fn get_kpi_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = KpiService::new(&state.db);

    let kpi = service.get_by_id(id).await?;

    match kpi {
        Some(kpi) => Ok((StatusCode::OK, Json(Payload::ok(KpiDto::from(kpi))))),
        None => Err(AppError::NotFound("KPI not found".to_string())),
    }
}

/// PUT /api/kpis/{id} - Update an indicator (admin only)
pub async fn update_kpi(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateKpiDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = KpiService::new(&state.db);

    let kpi = service.update(UpdateKpiParams::from_dto(id, payload)).await?;

    match kpi {
        Some(kpi) => Ok((StatusCode::OK, Json(Payload::ok(KpiDto::from(kpi))))),
        None => Err(AppError::NotFound("KPI not found".to_string())),
    }
}

/// DELETE /api/kpis/{id} - Delete an indicator (admin only)
pub async fn delete_kpi(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = KpiService::new(&state.db);

    let deleted = service.delete(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("KPI not found".to_string()))
    }
}

/// POST /api/employees/{id}/scores - Record a KPI score (admin only)
///
/// One score per indicator, employee and period; recording twice conflicts.
pub async fn record_kpi_score(
    State(state): State<AppState>,
    session: Session,
    Path(employee_id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<RecordKpiScoreDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = KpiService::new(&state.db);

    let score = service
        .record_score(RecordKpiScoreParams::from_dto(employee_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(CreatedDto::new(score.id))))
}

/// GET /api/employees/{id}/scores - List an employee's KPI scores
pub async fn get_kpi_scores(
    State(state): State<AppState>,
    session: Session,
    Path(employee_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = KpiService::new(&state.db);

    let scores = service.scores_for_employee(employee_id).await?;

    Ok((
        StatusCode::OK,
        Json(Payload::ok(KpiScoresDto {
            scores: scores
                .into_iter()
                .map(|(score, kpi)| KpiScoreDto::from_entity(score, kpi))
                .collect(),
        })),
    ))
}
