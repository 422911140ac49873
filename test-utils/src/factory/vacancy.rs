use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an open vacancy with default values.
pub async fn create_vacancy(db: &DatabaseConnection) -> Result<entity::vacancy::Model, DbErr> {
    let id = next_id();
    entity::vacancy::ActiveModel {
        title: ActiveValue::Set(format!("Vacancy {}", id)),
        department: ActiveValue::Set("Operations".to_string()),
        description: ActiveValue::Set("Open position".to_string()),
        open: ActiveValue::Set(true),
        opened_at: ActiveValue::Set(Utc::now()),
        closed_at: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a vacancy that is already closed.
pub async fn create_closed_vacancy(
    db: &DatabaseConnection,
) -> Result<entity::vacancy::Model, DbErr> {
    let id = next_id();
    entity::vacancy::ActiveModel {
        title: ActiveValue::Set(format!("Vacancy {}", id)),
        department: ActiveValue::Set("Operations".to_string()),
        description: ActiveValue::Set("Filled position".to_string()),
        open: ActiveValue::Set(false),
        opened_at: ActiveValue::Set(Utc::now()),
        closed_at: ActiveValue::Set(Some(Utc::now())),
        ..Default::default()
    }
    .insert(db)
    .await
}
