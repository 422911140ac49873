use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{CreatedDto, Payload, StatusDto},
        candidate::{
            CandidateDto, ChangeCandidateStatusDto, CreateCandidateDto, UpdateCandidateDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::candidate::{CreateCandidateParams, UpdateCandidateParams},
        service::candidate::CandidateService,
        state::AppState,
        validate::ValidatedJson,
    },
};

/// Tag for grouping candidate endpoints in OpenAPI documentation
pub static CANDIDATE_TAG: &str = "candidate";

/// Register a candidate for a vacancy.
///
/// The referenced vacancy must exist; a dangling reference is rejected as
/// an invalid reference.
///
/// # Returns
/// - `201 Created` - Successfully registered candidate
/// - `400 Bad Request` - Malformed body, failed validation, or unknown vacancy
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
#[utoipa::path(
    post,
    path = "/api/candidates",
    tag = CANDIDATE_TAG,
    request_body = CreateCandidateDto,
    responses(
        (status = 201, description = "Successfully registered candidate", body = CreatedDto),
        (status = 400, description = "Invalid candidate data or unknown vacancy", body = StatusDto),
        (status = 401, description = "Not logged in", body = StatusDto),
        (status = 403, description = "Not an admin", body = StatusDto),
        (status = 500, description = "Internal server error", body = StatusDto)
    ),
)]
pub async fn add_candidate(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<CreateCandidateDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = CandidateService::new(&state.db);

    let candidate = service
        .create(CreateCandidateParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(CreatedDto::new(candidate.id))))
}

/// Get a specific candidate with the vacancy they applied for.
///
/// # Returns
/// - `200 OK` - Candidate details
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No candidate with this id
#[utoipa::path(
    get,
    path = "/api/candidates/{id}",
    tag = CANDIDATE_TAG,
    params(
        ("id" = i32, Path, description = "Candidate id")
    ),
    responses(
        (status = 200, description = "Candidate details", body = CandidateDto),
        (status = 401, description = "Not logged in", body = StatusDto),
        (status = 404, description = "Candidate not found", body = StatusDto),
        (status = 500, description = "Internal server error", body = StatusDto)
    ),
)]
pub async fn get_candidate_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = CandidateService::new(&state.db);

    let candidate = service.get_by_id(id).await?;

    match candidate {
        Some((candidate, vacancy)) => Ok((
            StatusCode::OK,
            Json(Payload::ok(CandidateDto::from_entity(candidate, vacancy))),
        )),
        None => Err(AppError::NotFound("Candidate not found".to_string())),
    }
}

/// Update a candidate's contact details.
///
/// The pipeline status is out of scope here; it only moves through the
/// dedicated status endpoint.
///
/// # Returns
/// - `200 OK` - Updated candidate
/// - `400 Bad Request` - Malformed body or failed field validation
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
/// - `404 Not Found` - No candidate with this id
#[utoipa::path(
    put,
    path = "/api/candidates/{id}",
    tag = CANDIDATE_TAG,
    params(
        ("id" = i32, Path, description = "Candidate id")
    ),
    request_body = UpdateCandidateDto,
    responses(
        (status = 200, description = "Updated candidate", body = CandidateDto),
        (status = 400, description = "Invalid candidate data", body = StatusDto),
        (status = 401, description = "Not logged in", body = StatusDto),
        (status = 403, description = "Not an admin", body = StatusDto),
        (status = 404, description = "Candidate not found", body = StatusDto),
        (status = 500, description = "Internal server error", body = StatusDto)
    ),
)]
pub async fn update_candidate(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateCandidateDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = CandidateService::new(&state.db);

    let candidate = service
        .update(UpdateCandidateParams::from_dto(id, payload))
        .await?;

    match candidate {
        Some(candidate) => Ok((
            StatusCode::OK,
            Json(Payload::ok(CandidateDto::from_entity(candidate, None))),
        )),
        None => Err(AppError::NotFound("Candidate not found".to_string())),
    }
}

/// Get all candidates of a vacancy, oldest application first.
///
/// # Returns
/// - `200 OK` - List of candidates
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    get,
    path = "/api/vacancies/{id}/candidates",
    tag = CANDIDATE_TAG,
    params(
        ("id" = i32, Path, description = "Vacancy id")
    ),
    responses(
        (status = 200, description = "Candidates of the vacancy", body = Vec<CandidateDto>),
        (status = 401, description = "Not logged in", body = StatusDto),
        (status = 500, description = "Internal server error", body = StatusDto)
    ),
)]
pub async fn get_candidates_by_vacancy(
    State(state): State<AppState>,
    session: Session,
    Path(vacancy_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = CandidateService::new(&state.db);

    let candidates = service.get_by_vacancy(vacancy_id).await?;

    Ok((
        StatusCode::OK,
        Json(
            candidates
                .into_iter()
                .map(|c| CandidateDto::from_entity(c, None))
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Move a candidate through the hiring pipeline.
///
/// The pipeline runs applied → screening → interview → offered → hired; any
/// non-terminal stage may move to rejected. Anything else is an invalid
/// state transition.
///
/// # Returns
/// - `200 OK` - Candidate with the new status
/// - `400 Bad Request` - Malformed body or unknown status value
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
/// - `404 Not Found` - No candidate with this id
/// - `409 Conflict` - Transition not allowed from the current stage
#[utoipa::path(
    put,
    path = "/api/candidates/{id}/status",
    tag = CANDIDATE_TAG,
    params(
        ("id" = i32, Path, description = "Candidate id")
    ),
    request_body = ChangeCandidateStatusDto,
    responses(
        (status = 200, description = "Candidate with new status", body = CandidateDto),
        (status = 400, description = "Unknown status value", body = StatusDto),
        (status = 401, description = "Not logged in", body = StatusDto),
        (status = 403, description = "Not an admin", body = StatusDto),
        (status = 404, description = "Candidate not found", body = StatusDto),
        (status = 409, description = "Illegal status transition", body = StatusDto),
        (status = 500, description = "Internal server error", body = StatusDto)
    ),
)]
pub async fn change_candidate_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<ChangeCandidateStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = CandidateService::new(&state.db);

    let candidate = service.change_status(id, &payload.status).await?;

    Ok((
        StatusCode::OK,
        Json(Payload::ok(CandidateDto::from_entity(candidate, None))),
    ))
}

/// Remove a candidate.
///
/// # Returns
/// - `204 No Content` - Successfully deleted
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
/// - `404 Not Found` - No candidate with this id
#[utoipa::path(
    delete,
    path = "/api/candidates/{id}",
    tag = CANDIDATE_TAG,
    params(
        ("id" = i32, Path, description = "Candidate id")
    ),
    responses(
        (status = 204, description = "Successfully deleted candidate"),
        (status = 401, description = "Not logged in", body = StatusDto),
        (status = 403, description = "Not an admin", body = StatusDto),
        (status = 404, description = "Candidate not found", body = StatusDto),
        (status = 500, description = "Internal server error", body = StatusDto)
    ),
)]
pub async fn delete_candidate(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = CandidateService::new(&state.db);

    let deleted = service.delete(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Candidate not found".to_string()))
    }
}
