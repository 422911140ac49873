use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        account::{AccountDto, LoginDto},
        api::Payload,
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        service::account::AccountService,
        state::AppState,
        validate::ValidatedJson,
    },
};

/// POST /api/auth/login - Authenticate with a username and access code
///
/// The one-time bootstrap code logged at startup stands in for the access
/// code on the very first login; it creates (or promotes) the admin account
/// and becomes its access code.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let account_service = AccountService::new(&state.db);

    let account = if state.admin_codes.validate_and_consume(&payload.code).await {
        account_service
            .bootstrap_admin(&payload.username, &payload.code)
            .await?
    } else {
        account_service.login(&payload.username, &payload.code).await?
    };

    AuthSession::new(&session).set_account_id(account.id).await?;

    tracing::info!("account {} logged in", account.id);

    Ok((StatusCode::OK, Json(Payload::ok(AccountDto::from(account)))))
}

/// POST /api/auth/logout - Clear the session
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/auth/user - Get the currently logged-in account
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let account = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(Payload::ok(AccountDto::from(account)))))
}
