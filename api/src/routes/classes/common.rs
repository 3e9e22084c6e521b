use db::models::class;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body shared by class create and edit.
#[derive(Debug, Deserialize, Validate)]
pub struct ClassRequest {
    #[validate(length(min = 1, max = 100, message = "Class name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 20, message = "Class code must be 1-20 characters"))]
    pub code: String,

    pub subject: Option<String>,
}

/// A class plus its current roster size.
#[derive(Debug, Serialize, Default)]
pub struct ClassResponse {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub subject: Option<String>,
    pub student_count: u64,
    pub created_at: String,
    pub updated_at: String,
}

impl ClassResponse {
    pub fn from_model(class: class::Model, student_count: u64) -> Self {
        Self {
            id: class.id,
            name: class.name,
            code: class.code,
            subject: class.subject,
            student_count,
            created_at: class.created_at.to_rfc3339(),
            updated_at: class.updated_at.to_rfc3339(),
        }
    }
}

/// Paginated list envelope for classes.
#[derive(Debug, Serialize, Default)]
pub struct ClassListResponse {
    pub classes: Vec<ClassResponse>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}
