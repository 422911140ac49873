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
        investment::{CreateInvestmentDto, InvestmentDto, InvestmentsDto, UpdateInvestmentDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::investment::{CreateInvestmentParams, UpdateInvestmentParams},
        service::investment::InvestmentService,
        state::AppState,
        validate::ValidatedJson,
    },
};

/// POST /api/investments - Register an investment project (admin only)
pub async fn add_investment(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<CreateInvestmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = InvestmentService::new(&state.db);

    let investment = service
        .create(CreateInvestmentParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(CreatedDto::new(investment.id))))
}

/// GET /api/investments - List all investment projects
pub async fn get_investments(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = InvestmentService::new(&state.db);

    let investments = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(Payload::ok(InvestmentsDto {
            investments: investments.into_iter().map(InvestmentDto::from).collect(),
        })),
    ))
}

/// GET /api/investments/{id} - Get a specific investment project
pub async fn get_investment_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = InvestmentService::new(&state.db);

    let investment = service.get_by_id(id).await?;

    match investment {
        Some(investment) => Ok((
            StatusCode::OK,
            Json(Payload::ok(InvestmentDto::from(investment))),
        )),
        None => Err(AppError::NotFound("Investment not found".to_string())),
    }
}

/// PUT /api/investments/{id} - Update an investment project (admin only)
pub async fn update_investment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateInvestmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = InvestmentService::new(&state.db);

    let investment = service
        .update(UpdateInvestmentParams::from_dto(id, payload))
        .await?;

    match investment {
        Some(investment) => Ok((
            StatusCode::OK,
            Json(Payload::ok(InvestmentDto::from(investment))),
        )),
        None => Err(AppError::NotFound("Investment not found".to_string())),
    }
}

/// DELETE /api/investments/{id} - Delete an investment project (admin only)
pub async fn delete_investment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = InvestmentService::new(&state.db);

    let deleted = service.delete(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Investment not found".to_string()))
    }
}

/// GET /api/investments/{id}/report - Export an investment report
///
/// Stubbed until the reporting pipeline lands; answers 501.
pub async fn get_investment_report(
    State(state): State<AppState>,
    session: Session,
    Path(_id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    Err(AppError::NotImplemented(
        "investment report export".to_string(),
    ))
}
