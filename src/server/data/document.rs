use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder,
};

use crate::server::model::document::CreateDocumentParams;

pub struct DocumentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DocumentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Links a staged upload to an employee.
    pub async fn create(
        &self,
        params: CreateDocumentParams,
    ) -> Result<entity::document::Model, DbErr> {
        entity::document::ActiveModel {
            employee_id: ActiveValue::Set(params.employee_id),
            title: ActiveValue::Set(params.title),
            kind: ActiveValue::Set(params.kind),
            file_key: ActiveValue::Set(params.file_key),
            uploaded_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::document::Model>, DbErr> {
        entity::prelude::Document::find_by_id(id).one(self.db).await
    }

    pub async fn get_by_employee(
        &self,
        employee_id: i32,
    ) -> Result<Vec<entity::document::Model>, DbErr> {
        entity::prelude::Document::find()
            .filter(entity::document::Column::EmployeeId.eq(employee_id))
            .order_by_desc(entity::document::Column::UploadedAt)
            .all(self.db)
            .await
    }

    /// Deletes a document row and returns the removed model so the caller
    /// can clean up the stored file; `None` when the id does not exist.
    pub async fn delete(&self, id: i32) -> Result<Option<entity::document::Model>, DbErr> {
        let Some(document) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        document.clone().delete(self.db).await?;

        Ok(Some(document))
    }
}
