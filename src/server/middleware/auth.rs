use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::account::AccountRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
};

pub enum Permission {
    Admin,
}

/// Request-scoped identity check. Loads the account behind the session's
/// user id and verifies the required permissions; handlers receive the
/// loaded account as a plain value.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<entity::account::Model, AppError> {
        let account_repo = AccountRepository::new(self.db);

        let Some(account_id) = AuthSession::new(self.session).get_account_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(account) = account_repo.find_by_id(account_id).await? else {
            return Err(AuthError::UserNotInDatabase(account_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !account.admin {
                        return Err(AuthError::AccessDenied(
                            account_id,
                            "admin permission required".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(account)
    }
}
