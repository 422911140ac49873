use sea_orm::DatabaseConnection;

use crate::server::{
    data::document::DocumentRepository, error::AppError, model::document::CreateDocumentParams,
    upload::FileStore,
};

pub struct DocumentService<'a> {
    db: &'a DatabaseConnection,
    file_store: &'a dyn FileStore,
}

impl<'a> DocumentService<'a> {
    pub fn new(db: &'a DatabaseConnection, file_store: &'a dyn FileStore) -> Self {
        Self { db, file_store }
    }

    /// Two-phase upload: stage the file first, link it to the employee
    /// second. When the link fails the staged file is deleted again, so an
    /// upload is never left orphaned.
    pub async fn upload(
        &self,
        employee_id: i32,
        title: String,
        kind: String,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<entity::document::Model, AppError> {
        let file_key = self.file_store.store(file_name, bytes).await?;

        let result = DocumentRepository::new(self.db)
            .create(CreateDocumentParams {
                employee_id,
                title,
                kind,
                file_key: file_key.clone(),
            })
            .await;

        match result {
            Ok(document) => Ok(document),
            Err(err) => {
                if let Err(cleanup_err) = self.file_store.delete(&file_key).await {
                    tracing::error!(
                        "failed to roll back staged upload '{}': {}",
                        file_key,
                        cleanup_err
                    );
                }

                Err(err.into())
            }
        }
    }

    pub async fn get_by_employee(
        &self,
        employee_id: i32,
    ) -> Result<Vec<entity::document::Model>, AppError> {
        let repo = DocumentRepository::new(self.db);

        let documents = repo.get_by_employee(employee_id).await?;

        Ok(documents)
    }

    /// Deletes the document row, then removes the stored file best-effort.
    /// A failed file removal is logged, not surfaced: the row is already
    /// gone and the delete must stay observable as successful.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let Some(document) = DocumentRepository::new(self.db).delete(id).await? else {
            return Ok(false);
        };

        if let Err(err) = self.file_store.delete(&document.file_key).await {
            tracing::warn!(
                "failed to remove file '{}' of deleted document {}: {}",
                document.file_key,
                document.id,
                err
            );
        }

        Ok(true)
    }
}
