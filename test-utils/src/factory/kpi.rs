use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a performance indicator with default values.
pub async fn create_kpi(db: &DatabaseConnection) -> Result<entity::kpi::Model, DbErr> {
    let id = next_id();
    entity::kpi::ActiveModel {
        name: ActiveValue::Set(format!("Indicator {}", id)),
        description: ActiveValue::Set("Quality of delivered work".to_string()),
        weight: ActiveValue::Set(25),
        ..Default::default()
    }
    .insert(db)
    .await
}
