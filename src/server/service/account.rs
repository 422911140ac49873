use rand::{distr::Alphanumeric, Rng};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::server::{
    data::account::AccountRepository,
    error::{auth::AuthError, AppError},
    model::account::CreateAccountParams,
};

/// Length of generated account access codes.
const ACCESS_CODE_LEN: usize = 16;

pub struct AccountService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccountService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an account with a freshly generated access code. The code is
    /// returned alongside the model; it is not retrievable later.
    pub async fn create(
        &self,
        params: CreateAccountParams,
    ) -> Result<(entity::account::Model, String), AppError> {
        let repo = AccountRepository::new(self.db);

        let access_code = generate_access_code();
        let account = repo.create(params, access_code.clone()).await?;

        Ok((account, access_code))
    }

    pub async fn get_all(&self) -> Result<Vec<entity::account::Model>, AppError> {
        let repo = AccountRepository::new(self.db);

        let accounts = repo.get_all().await?;

        Ok(accounts)
    }

    /// Checks a username/access-code pair. Both unknown usernames and wrong
    /// codes fail the same way; callers cannot probe which part was wrong.
    pub async fn login(&self, username: &str, code: &str) -> Result<entity::account::Model, AppError> {
        let repo = AccountRepository::new(self.db);

        let Some(account) = repo.find_by_username(username).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if account.access_code != code {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(account)
    }

    /// Completes the one-time admin bootstrap: creates the account (or
    /// promotes an existing one) and keeps the consumed bootstrap code as
    /// its access code for subsequent logins.
    pub async fn bootstrap_admin(
        &self,
        username: &str,
        code: &str,
    ) -> Result<entity::account::Model, AppError> {
        let repo = AccountRepository::new(self.db);

        match repo.find_by_username(username).await? {
            Some(account) => {
                let mut active_model: entity::account::ActiveModel = account.into();
                active_model.admin = ActiveValue::Set(true);
                active_model.access_code = ActiveValue::Set(code.to_string());

                let promoted = active_model.update(self.db).await?;

                Ok(promoted)
            }
            None => {
                let account = repo
                    .create(
                        CreateAccountParams {
                            username: username.to_string(),
                            admin: true,
                            employee_id: None,
                        },
                        code.to_string(),
                    )
                    .await?;

                Ok(account)
            }
        }
    }
}

fn generate_access_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(ACCESS_CODE_LEN)
        .map(char::from)
        .collect()
}
