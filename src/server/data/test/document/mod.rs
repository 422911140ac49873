use entity::prelude::*;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{data::document::DocumentRepository, model::document::CreateDocumentParams};

mod create;
mod delete;

fn create_params(employee_id: i32) -> CreateDocumentParams {
    CreateDocumentParams {
        employee_id,
        title: "Employment contract".to_string(),
        kind: "contract".to_string(),
        file_key: "abc123-contract.pdf".to_string(),
    }
}
