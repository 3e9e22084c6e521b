use super::common::{StudentRequest, StudentResponse};
use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use common::format_validation_errors;
use db::models::student;
use validator::Validate;

/// POST /api/students
///
/// Create a student record. Students never log in; this is bookkeeping only.
///
/// ### Request Body
/// ```json
/// {
///   "student_number": "S-1001",
///   "full_name": "Amahle Zulu",
///   "email": "amahle@school.test"
/// }
/// ```
///
/// ### Responses
///
/// - `201 Created` (the new student)
/// - `400 Bad Request` (validation failure)
/// - `409 Conflict` (duplicate student number)
/// ```json
/// {
///   "success": false,
///   "message": "A student with this student number already exists"
/// }
/// ```
pub async fn create_student(
    State(state): State<AppState>,
    Json(req): Json<StudentRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<StudentResponse>::error(error_message)),
        );
    }

    match student::Model::create(
        state.db(),
        &req.student_number,
        &req.full_name,
        req.email.as_deref(),
    )
    .await
    {
        Ok(created) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                StudentResponse::from_model(created),
                "Student created successfully",
            )),
        ),
        Err(e) if e.to_string().contains("students.student_number") => (
            StatusCode::CONFLICT,
            Json(ApiResponse::<StudentResponse>::error(
                "A student with this student number already exists",
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<StudentResponse>::error(format!(
                "Database error: {}",
                e
            ))),
        ),
    }
}
