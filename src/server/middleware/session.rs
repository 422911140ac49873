//! Type-safe session access.
//!
//! `AuthSession` wraps the raw tower-sessions [`Session`] and exposes only
//! the authentication state, keeping the session key and value type in one
//! place instead of scattered across handlers.

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_ACCOUNT_ID: &str = "auth:account";

pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the account id, establishing a logged-in session.
    pub async fn set_account_id(&self, account_id: i32) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_ACCOUNT_ID, account_id)
            .await?;
        Ok(())
    }

    /// Returns the logged-in account id, or `None` when not authenticated.
    pub async fn get_account_id(&self) -> Result<Option<i32>, AppError> {
        let account_id = self.session.get::<i32>(SESSION_AUTH_ACCOUNT_ID).await?;
        Ok(account_id)
    }

    /// Clears all session data; used on logout.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
