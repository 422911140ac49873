use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        account::{AccountDto, AccountsDto, CreateAccountDto, CreatedAccountDto},
        api::Payload,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::account::CreateAccountParams,
        service::account::AccountService,
        state::AppState,
        validate::ValidatedJson,
    },
};

/// POST /api/accounts - Create an account (admin only)
///
/// The generated access code is returned exactly once; it is not
/// retrievable afterwards.
pub async fn add_account(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<CreateAccountDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = AccountService::new(&state.db);

    let (account, access_code) = service
        .create(CreateAccountParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(Payload::created(CreatedAccountDto {
            id: account.id,
            username: account.username,
            access_code,
        })),
    ))
}

/// GET /api/accounts - List all accounts (admin only)
pub async fn get_accounts(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = AccountService::new(&state.db);

    let accounts = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(Payload::ok(AccountsDto {
            accounts: accounts.into_iter().map(AccountDto::from).collect(),
        })),
    ))
}
