use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body shared by student create and edit. An empty-string email is
/// rejected; omit the field for students without one.
#[derive(Debug, Deserialize, Validate)]
pub struct StudentRequest {
    #[validate(length(min = 1, max = 30, message = "Student number must be 1-30 characters"))]
    pub student_number: String,

    #[validate(length(min = 1, max = 100, message = "Full name must be 1-100 characters"))]
    pub full_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
}

#[derive(Debug, Serialize, Default)]
pub struct StudentResponse {
    pub id: i64,
    pub student_number: String,
    pub full_name: String,
    pub email: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl StudentResponse {
    pub fn from_model(student: db::models::student::Model) -> Self {
        Self {
            id: student.id,
            student_number: student.student_number,
            full_name: student.full_name,
            email: student.email,
            created_at: student.created_at.to_rfc3339(),
            updated_at: student.updated_at.to_rfc3339(),
        }
    }
}

/// Paginated list envelope for students.
#[derive(Debug, Serialize, Default)]
pub struct StudentListResponse {
    pub students: Vec<StudentResponse>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}
