use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::{CreatedDto, Payload, StatusDto},
        vacancy::{CreateVacancyDto, PaginatedVacanciesDto, UpdateVacancyDto, VacancyDto},
    },
    server::{
        controller::{per_page, total_pages},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::vacancy::{CreateVacancyParams, UpdateVacancyParams},
        service::vacancy::VacancyService,
        state::AppState,
        validate::ValidatedJson,
    },
};

/// Tag for grouping vacancy endpoints in OpenAPI documentation
pub static VACANCY_TAG: &str = "vacancy";

#[derive(Deserialize)]
pub struct VacancyListParams {
    /// Restrict to open (`true`) or closed (`false`) vacancies.
    pub open: Option<bool>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "super::default_entries")]
    pub entries: u64,
}

/// Open a new vacancy.
///
/// # Returns
/// - `201 Created` - Successfully created vacancy, body carries the new id
/// - `400 Bad Request` - Malformed body or failed field validation
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
#[utoipa::path(
    post,
    path = "/api/vacancies",
    tag = VACANCY_TAG,
    request_body = CreateVacancyDto,
    responses(
        (status = 201, description = "Successfully created vacancy", body = CreatedDto),
        (status = 400, description = "Invalid vacancy data", body = StatusDto),
        (status = 401, description = "Not logged in", body = StatusDto),
        (status = 403, description = "Not an admin", body = StatusDto),
        (status = 500, description = "Internal server error", body = StatusDto)
    ),
)]
pub async fn add_vacancy(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<CreateVacancyDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = VacancyService::new(&state.db);

    let vacancy = service.create(CreateVacancyParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(CreatedDto::new(vacancy.id))))
}

/// Get a page of vacancies, optionally filtered by open/closed state.
///
/// # Returns
/// - `200 OK` - Page of vacancies
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    get,
    path = "/api/vacancies",
    tag = VACANCY_TAG,
    params(
        ("open" = Option<bool>, Query, description = "Restrict to open or closed vacancies"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Page of vacancies", body = PaginatedVacanciesDto),
        (status = 401, description = "Not logged in", body = StatusDto),
        (status = 500, description = "Internal server error", body = StatusDto)
    ),
)]
pub async fn get_vacancies(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<VacancyListParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = VacancyService::new(&state.db);

    let per_page = per_page(params.entries);
    let (vacancies, total) = service
        .get_paginated(params.open, params.page, per_page)
        .await?;

    Ok((
        StatusCode::OK,
        Json(Payload::ok(PaginatedVacanciesDto {
            vacancies: vacancies.into_iter().map(VacancyDto::from).collect(),
            total,
            page: params.page,
            per_page,
            total_pages: total_pages(total, per_page),
        })),
    ))
}

/// Get a specific vacancy by id.
///
/// # Returns
/// - `200 OK` - Vacancy details
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No vacancy with this id
#[utoipa::path(
    get,
    path = "/api/vacancies/{id}",
    tag = VACANCY_TAG,
    params(
        ("id" = i32, Path, description = "Vacancy id")
    ),
    responses(
        (status = 200, description = "Vacancy details", body = VacancyDto),
        (status = 401, description = "Not logged in", body = StatusDto),
        (status = 404, description = "Vacancy not found", body = StatusDto),
        (status = 500, description = "Internal server error", body = StatusDto)
    ),
)]
pub async fn get_vacancy_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = VacancyService::new(&state.db);

    let vacancy = service.get_by_id(id).await?;

    match vacancy {
        Some(vacancy) => Ok((StatusCode::OK, Json(Payload::ok(VacancyDto::from(vacancy))))),
        None => Err(AppError::NotFound("Vacancy not found".to_string())),
    }
}

/// Update a vacancy's title, department and description.
///
/// # Returns
/// - `200 OK` - Updated vacancy
/// - `400 Bad Request` - Malformed body or failed field validation
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
/// - `404 Not Found` - No vacancy with this id
#[utoipa::path(
    put,
    path = "/api/vacancies/{id}",
    tag = VACANCY_TAG,
    params(
        ("id" = i32, Path, description = "Vacancy id")
    ),
    request_body = UpdateVacancyDto,
    responses(
        (status = 200, description = "Updated vacancy", body = VacancyDto),
        (status = 400, description = "Invalid vacancy data", body = StatusDto),
        (status = 401, description = "Not logged in", body = StatusDto),
        (status = 403, description = "Not an admin", body = StatusDto),
        (status = 404, description = "Vacancy not found", body = StatusDto),
        (status = 500, description = "Internal server error", body = StatusDto)
    ),
)]
pub async fn update_vacancy(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateVacancyDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = VacancyService::new(&state.db);

    let vacancy = service
        .update(UpdateVacancyParams::from_dto(id, payload))
        .await?;

    match vacancy {
        Some(vacancy) => Ok((StatusCode::OK, Json(Payload::ok(VacancyDto::from(vacancy))))),
        None => Err(AppError::NotFound("Vacancy not found".to_string())),
    }
}

/// Close an open vacancy.
///
/// Closing is a one-way transition; closing an already-closed vacancy is a
/// conflict, not a no-op.
///
/// # Returns
/// - `200 OK` - Closed vacancy
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
/// - `404 Not Found` - No vacancy with this id
/// - `409 Conflict` - Vacancy is already closed
#[utoipa::path(
    post,
    path = "/api/vacancies/{id}/close",
    tag = VACANCY_TAG,
    params(
        ("id" = i32, Path, description = "Vacancy id")
    ),
    responses(
        (status = 200, description = "Closed vacancy", body = VacancyDto),
        (status = 401, description = "Not logged in", body = StatusDto),
        (status = 403, description = "Not an admin", body = StatusDto),
        (status = 404, description = "Vacancy not found", body = StatusDto),
        (status = 409, description = "Vacancy already closed", body = StatusDto),
        (status = 500, description = "Internal server error", body = StatusDto)
    ),
)]
pub async fn close_vacancy(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = VacancyService::new(&state.db);

    let vacancy = service.close(id).await?;

    Ok((StatusCode::OK, Json(Payload::ok(VacancyDto::from(vacancy)))))
}

/// Delete a vacancy and, through cascading deletes, its candidates.
///
/// # Returns
/// - `204 No Content` - Successfully deleted
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
/// - `404 Not Found` - No vacancy with this id
#[utoipa::path(
    delete,
    path = "/api/vacancies/{id}",
    tag = VACANCY_TAG,
    params(
        ("id" = i32, Path, description = "Vacancy id")
    ),
    responses(
        (status = 204, description = "Successfully deleted vacancy"),
        (status = 401, description = "Not logged in", body = StatusDto),
        (status = 403, description = "Not an admin", body = StatusDto),
        (status = 404, description = "Vacancy not found", body = StatusDto),
        (status = 500, description = "Internal server error", body = StatusDto)
    ),
)]
pub async fn delete_vacancy(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = VacancyService::new(&state.db);

    let deleted = service.delete(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Vacancy not found".to_string()))
    }
}
