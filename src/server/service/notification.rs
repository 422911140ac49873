use sea_orm::DatabaseConnection;

use crate::server::{
    data::{account::AccountRepository, notification::NotificationRepository},
    error::AppError,
    model::notification::BroadcastParams,
};

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fans the message out, one notification row per recipient. An empty
    /// recipient list targets every account.
    pub async fn broadcast(&self, params: BroadcastParams) -> Result<u64, AppError> {
        let repo = NotificationRepository::new(self.db);

        let account_ids = if params.account_ids.is_empty() {
            AccountRepository::new(self.db).all_ids().await?
        } else {
            params.account_ids
        };

        let created = repo
            .broadcast(&account_ids, &params.title, &params.body)
            .await?;

        Ok(created)
    }

    pub async fn get_for_account(
        &self,
        account_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::notification::Model>, u64), AppError> {
        let repo = NotificationRepository::new(self.db);

        let notifications = repo.get_for_account(account_id, page, per_page).await?;

        Ok(notifications)
    }

    pub async fn unread_count(&self, account_id: i32) -> Result<u64, AppError> {
        let repo = NotificationRepository::new(self.db);

        let count = repo.unread_count(account_id).await?;

        Ok(count)
    }

    /// Marks one of the account's notifications read; not-found covers both
    /// a missing id and someone else's notification.
    pub async fn mark_read(&self, id: i32, account_id: i32) -> Result<(), AppError> {
        let repo = NotificationRepository::new(self.db);

        if !repo.mark_read(id, account_id).await? {
            return Err(AppError::NotFound("Notification not found".to_string()));
        }

        Ok(())
    }

    pub async fn mark_all_read(&self, account_id: i32) -> Result<u64, AppError> {
        let repo = NotificationRepository::new(self.db);

        let changed = repo.mark_all_read(account_id).await?;

        Ok(changed)
    }
}
