use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::{Payload, StatusDto},
        telemetry::{AndijanReadingDto, MeasurementDto, MeasurementsDto, ReadingDto},
    },
    server::{
        controller::per_page,
        error::AppError,
        middleware::auth::AuthGuard,
        service::telemetry::{convert::ANDIJAN_RES_ID, TelemetryService},
        state::AppState,
        validate::ValidatedJson,
    },
};

/// Tag for grouping telemetry endpoints in OpenAPI documentation
pub static TELEMETRY_TAG: &str = "telemetry";

#[derive(Deserialize)]
pub struct MeasurementListParams {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "super::default_entries")]
    pub entries: u64,
}

/// Ingest a raw sensor reading for a reservoir.
///
/// Converts the electrical reading into a derived measurement using the
/// reservoir's formula and persists it. Unsupported reservoir ids are
/// rejected before any conversion or write happens; nothing partial is ever
/// stored. Field devices post here directly, so no session is required.
///
/// # Returns
/// - `201 Created` - Measurement stored; bare envelope, no payload
/// - `400 Bad Request` - Malformed body, failed validation, or unsupported
///   reservoir id (the id is named in the error)
#[utoipa::path(
    post,
    path = "/api/telemetry/resources/{res_id}/measurements",
    tag = TELEMETRY_TAG,
    params(
        ("res_id" = i64, Path, description = "Reservoir/resource id")
    ),
    request_body = ReadingDto,
    responses(
        (status = 201, description = "Measurement stored", body = StatusDto),
        (status = 400, description = "Invalid reading or unsupported reservoir id", body = StatusDto),
        (status = 500, description = "Internal server error", body = StatusDto)
    ),
)]
pub async fn ingest_measurement(
    State(state): State<AppState>,
    Path(res_id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<ReadingDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = TelemetryService::new(&state.db);

    service
        .ingest(
            res_id,
            payload.indicator_level,
            payload.current,
            payload.resistance,
            payload.time,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(StatusDto::new(StatusCode::CREATED)),
    ))
}

/// Ingest a raw sensor reading from the Andijan site.
///
/// Fixed-site variant of the generic ingestion path; the reservoir id is
/// implied and the reading is stamped with the server clock.
///
/// # Returns
/// - `201 Created` - Measurement stored; bare envelope, no payload
/// - `400 Bad Request` - Malformed body or failed validation
#[utoipa::path(
    post,
    path = "/api/telemetry/andijan/measurements",
    tag = TELEMETRY_TAG,
    request_body = AndijanReadingDto,
    responses(
        (status = 201, description = "Measurement stored", body = StatusDto),
        (status = 400, description = "Invalid reading", body = StatusDto),
        (status = 500, description = "Internal server error", body = StatusDto)
    ),
)]
pub async fn ingest_andijan_measurement(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AndijanReadingDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = TelemetryService::new(&state.db);

    service
        .ingest(
            ANDIJAN_RES_ID,
            payload.indicator_level,
            payload.current,
            payload.resistance,
            None,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(StatusDto::new(StatusCode::CREATED)),
    ))
}

/// Get recent measurements of a reservoir, newest first.
///
/// # Returns
/// - `200 OK` - Page of measurements
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    get,
    path = "/api/telemetry/resources/{res_id}/measurements",
    tag = TELEMETRY_TAG,
    params(
        ("res_id" = i64, Path, description = "Reservoir/resource id"),
        ("from" = Option<String>, Query, description = "Earliest timestamp (RFC 3339)"),
        ("to" = Option<String>, Query, description = "Latest timestamp (RFC 3339)"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Page of measurements", body = MeasurementsDto),
        (status = 401, description = "Not logged in", body = StatusDto),
        (status = 500, description = "Internal server error", body = StatusDto)
    ),
)]
pub async fn get_measurements(
    State(state): State<AppState>,
    session: Session,
    Path(res_id): Path<i64>,
    Query(params): Query<MeasurementListParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = TelemetryService::new(&state.db);

    let per_page = per_page(params.entries);
    let (measurements, total) = service
        .get_measurements(res_id, params.from, params.to, params.page, per_page)
        .await?;

    Ok((
        StatusCode::OK,
        Json(Payload::ok(MeasurementsDto {
            measurements: measurements.into_iter().map(MeasurementDto::from).collect(),
            total,
            page: params.page,
            per_page,
        })),
    ))
}
