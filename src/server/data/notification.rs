use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fans a message out to the given accounts, one row per recipient.
    /// Returns the number of notifications created.
    pub async fn broadcast(
        &self,
        account_ids: &[i32],
        title: &str,
        body: &str,
    ) -> Result<u64, DbErr> {
        if account_ids.is_empty() {
            return Ok(0);
        }

        let now = Utc::now();
        let rows: Vec<entity::notification::ActiveModel> = account_ids
            .iter()
            .map(|account_id| entity::notification::ActiveModel {
                account_id: ActiveValue::Set(*account_id),
                title: ActiveValue::Set(title.to_string()),
                body: ActiveValue::Set(body.to_string()),
                read: ActiveValue::Set(false),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .collect();

        entity::prelude::Notification::insert_many(rows)
            .exec(self.db)
            .await?;

        Ok(account_ids.len() as u64)
    }

    pub async fn get_for_account(
        &self,
        account_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::notification::Model>, u64), DbErr> {
        let paginator = entity::prelude::Notification::find()
            .filter(entity::notification::Column::AccountId.eq(account_id))
            .order_by_desc(entity::notification::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let notifications = paginator.fetch_page(page).await?;

        Ok((notifications, total))
    }

    pub async fn unread_count(&self, account_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Notification::find()
            .filter(entity::notification::Column::AccountId.eq(account_id))
            .filter(entity::notification::Column::Read.eq(false))
            .count(self.db)
            .await
    }

    /// Marks one notification read; `false` when it does not exist or is
    /// owned by a different account.
    pub async fn mark_read(&self, id: i32, account_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Notification::update_many()
            .col_expr(entity::notification::Column::Read, Expr::value(true))
            .filter(entity::notification::Column::Id.eq(id))
            .filter(entity::notification::Column::AccountId.eq(account_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Marks every unread notification of the account read; returns how many
    /// rows changed.
    pub async fn mark_all_read(&self, account_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Notification::update_many()
            .col_expr(entity::notification::Column::Read, Expr::value(true))
            .filter(entity::notification::Column::AccountId.eq(account_id))
            .filter(entity::notification::Column::Read.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
