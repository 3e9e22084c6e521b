use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::{class, enrollment, student};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct EnrollRequest {
    pub student_id: i64,
}

/// POST /api/classes/{class_id}/students
///
/// Enroll a student in a class.
///
/// ### Request Body
/// ```json
/// { "student_id": 7 }
/// ```
///
/// ### Responses
///
/// - `201 Created`
/// ```json
/// {
///   "success": true,
///   "data": {},
///   "message": "Student enrolled successfully"
/// }
/// ```
///
/// - `404 Not Found` (unknown class or student)
/// - `409 Conflict` (already enrolled)
/// ```json
/// {
///   "success": false,
///   "message": "Student is already enrolled in this class"
/// }
/// ```
pub async fn enroll_student(
    State(state): State<AppState>,
    Path(class_id): Path<i64>,
    Json(req): Json<EnrollRequest>,
) -> impl IntoResponse {
    match class::Model::get_by_id(state.db(), class_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Empty>::error("Class not found")),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error(format!("Database error: {}", e))),
            );
        }
    }

    match student::Model::get_by_id(state.db(), req.student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Empty>::error("Student not found")),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error(format!("Database error: {}", e))),
            );
        }
    }

    match enrollment::Model::enroll(state.db(), class_id, req.student_id).await {
        Ok(_) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                Empty::default(),
                "Student enrolled successfully",
            )),
        ),
        Err(e) if e.to_string().to_uppercase().contains("UNIQUE") => (
            StatusCode::CONFLICT,
            Json(ApiResponse::<Empty>::error(
                "Student is already enrolled in this class",
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!("Database error: {}", e))),
        ),
    }
}
