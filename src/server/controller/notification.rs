use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{Payload, StatusDto},
        notification::{BroadcastDto, NotificationDto, NotificationsDto, UnreadCountDto},
    },
    server::{
        controller::{per_page, PaginationParams},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::notification::BroadcastParams,
        service::notification::NotificationService,
        state::AppState,
        validate::ValidatedJson,
    },
};

/// POST /api/notifications - Broadcast a notification (admin only)
///
/// Fans out to the listed accounts, or to every account when no recipients
/// are given.
pub async fn broadcast_notification(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<BroadcastDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = NotificationService::new(&state.db);

    let created = service.broadcast(BroadcastParams::from_dto(payload)).await?;

    tracing::info!("broadcast created {} notifications", created);

    Ok((
        StatusCode::CREATED,
        Json(StatusDto::new(StatusCode::CREATED)),
    ))
}

/// GET /api/notifications - List the current account's notifications
pub async fn get_notifications(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let account = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = NotificationService::new(&state.db);

    let per_page = per_page(params.entries);
    let (notifications, total) = service
        .get_for_account(account.id, params.page, per_page)
        .await?;

    Ok((
        StatusCode::OK,
        Json(Payload::ok(NotificationsDto {
            notifications: notifications
                .into_iter()
                .map(NotificationDto::from)
                .collect(),
            total,
            page: params.page,
            per_page,
        })),
    ))
}

/// GET /api/notifications/unread - Unread count for the current account
pub async fn get_unread_count(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let account = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = NotificationService::new(&state.db);

    let unread = service.unread_count(account.id).await?;

    Ok((StatusCode::OK, Json(Payload::ok(UnreadCountDto { unread }))))
}

/// PUT /api/notifications/{id}/read - Mark one notification read
///
/// Only the owner can mark a notification; anything else is a 404.
pub async fn mark_notification_read(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let account = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = NotificationService::new(&state.db);

    service.mark_read(id, account.id).await?;

    Ok((StatusCode::OK, Json(StatusDto::new(StatusCode::OK))))
}

/// PUT /api/notifications/read-all - Mark all notifications read
pub async fn mark_all_notifications_read(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let account = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = NotificationService::new(&state.db);

    service.mark_all_read(account.id).await?;

    Ok((StatusCode::OK, Json(StatusDto::new(StatusCode::OK))))
}
