use crate::model::document::DocumentDto;

/// Parameters for linking a staged upload to an employee. `file_key` is the
/// storage key returned by the file store when the upload was staged.
#[derive(Debug, Clone)]
pub struct CreateDocumentParams {
    pub employee_id: i32,
    pub title: String,
    pub kind: String,
    pub file_key: String,
}

impl From<entity::document::Model> for DocumentDto {
    fn from(model: entity::document::Model) -> Self {
        Self {
            id: model.id,
            employee_id: model.employee_id,
            title: model.title,
            kind: model.kind,
            uploaded_at: model.uploaded_at,
        }
    }
}
