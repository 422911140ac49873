use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::Payload, task::TasksDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::task::TaskService,
        state::AppState,
    },
};

/// GET /api/tasks - Pending managerial work (admin only)
///
/// One list across domains: vacation requests awaiting a decision and
/// candidates holding an offer. Each entry is a concrete task kind; the
/// repository decides the kind, this handler only serializes.
pub async fn get_tasks(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = TaskService::new(&state.db);

    let tasks = service.pending().await?;

    Ok((StatusCode::OK, Json(Payload::ok(TasksDto { tasks }))))
}
