use crate::{
    model::notification::{BroadcastDto, NotificationDto},
    server::validate::{self, Validate},
};

/// Fan-out parameters; an empty recipient list means every account.
#[derive(Debug, Clone)]
pub struct BroadcastParams {
    pub title: String,
    pub body: String,
    pub account_ids: Vec<i32>,
}

impl BroadcastParams {
    pub fn from_dto(dto: BroadcastDto) -> Self {
        Self {
            title: dto.title,
            body: dto.body,
            account_ids: dto.account_ids.unwrap_or_default(),
        }
    }
}

impl From<entity::notification::Model> for NotificationDto {
    fn from(model: entity::notification::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            body: model.body,
            read: model.read,
            created_at: model.created_at,
        }
    }
}

impl Validate for BroadcastDto {
    fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();
        validate::required("title", &self.title, &mut violations);
        validate::required("body", &self.body, &mut violations);
        violations
    }
}
