use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a candidate for the given vacancy, in the given pipeline status.
pub async fn create_candidate_with_status(
    db: &DatabaseConnection,
    vacancy_id: i32,
    status: &str,
) -> Result<entity::candidate::Model, DbErr> {
    let id = next_id();
    entity::candidate::ActiveModel {
        vacancy_id: ActiveValue::Set(vacancy_id),
        full_name: ActiveValue::Set(format!("Candidate {}", id)),
        email: ActiveValue::Set(format!("candidate{}@example.com", id)),
        phone: ActiveValue::Set(None),
        status: ActiveValue::Set(status.to_string()),
        applied_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a candidate in the initial `applied` status.
pub async fn create_candidate(
    db: &DatabaseConnection,
    vacancy_id: i32,
) -> Result<entity::candidate::Model, DbErr> {
    create_candidate_with_status(db, vacancy_id, "applied").await
}
