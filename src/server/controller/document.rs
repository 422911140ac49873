use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{CreatedDto, Payload},
        document::{DocumentDto, DocumentsDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::document::DocumentService,
        state::AppState,
        validate,
    },
};

/// POST /api/employees/{id}/documents - Upload a document (admin only)
///
/// Multipart form with `title` and `kind` text fields and a `file` part.
/// The form is parsed field by field and validated explicitly; the upload
/// is staged before the database row is written and rolled back when the
/// write fails.
pub async fn upload_document(
    State(state): State<AppState>,
    session: Session,
    Path(employee_id): Path<i32>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let mut title = String::new();
    let mut kind = String::new();
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| AppError::BadRequest("invalid request format".to_string()))?
    {
        match field.name() {
            Some("title") => {
                title = field
                    .text()
                    .await
                    .map_err(|_| AppError::BadRequest("invalid request format".to_string()))?;
            }
            Some("kind") => {
                kind = field
                    .text()
                    .await
                    .map_err(|_| AppError::BadRequest("invalid request format".to_string()))?;
            }
            Some("file") => {
                let file_name = field.file_name().unwrap_or("upload.bin").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|_| AppError::BadRequest("invalid request format".to_string()))?;
                file = Some((file_name, bytes.to_vec()));
            }
            _ => {}
        }
    }

    let mut violations = Vec::new();
    validate::required("title", &title, &mut violations);
    validate::required("kind", &kind, &mut violations);

    let Some((file_name, bytes)) = file else {
        violations.push("field 'file' is required".to_string());
        return Err(AppError::Validation(violations));
    };

    if !violations.is_empty() {
        return Err(AppError::Validation(violations));
    }

    let service = DocumentService::new(&state.db, state.file_store.as_ref());

    let document = service
        .upload(employee_id, title, kind, &file_name, &bytes)
        .await?;

    Ok((StatusCode::CREATED, Json(CreatedDto::new(document.id))))
}

/// GET /api/employees/{id}/documents - List an employee's documents
pub async fn get_documents_by_employee(
    State(state): State<AppState>,
    session: Session,
    Path(employee_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = DocumentService::new(&state.db, state.file_store.as_ref());

    let documents = service.get_by_employee(employee_id).await?;

    Ok((
        StatusCode::OK,
        Json(Payload::ok(DocumentsDto {
            documents: documents.into_iter().map(DocumentDto::from).collect(),
        })),
    ))
}

/// DELETE /api/documents/{id} - Delete a document (admin only)
pub async fn delete_document(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = DocumentService::new(&state.db, state.file_store.as_ref());

    let deleted = service.delete(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Document not found".to_string()))
    }
}
