use super::common::{StudentRequest, StudentResponse};
use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::format_validation_errors;
use db::models::student;
use validator::Validate;

/// PUT /api/students/{student_id}
///
/// Edit a student record. The body fully replaces number, name and email;
/// sending `"email": null` clears a stored address.
///
/// ### Responses
///
/// - `200 OK` (updated student)
/// - `400 Bad Request` (validation failure)
/// - `404 Not Found`
/// - `409 Conflict` (student number already used by another record)
pub async fn edit_student(
    State(state): State<AppState>,
    Path(student_id): Path<i64>,
    Json(req): Json<StudentRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<StudentResponse>::error(error_message)),
        );
    }

    match student::Model::get_by_id(state.db(), student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<StudentResponse>::error("Student not found")),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<StudentResponse>::error(format!(
                    "Database error: {}",
                    e
                ))),
            );
        }
    }

    match student::Model::edit(
        state.db(),
        student_id,
        &req.student_number,
        &req.full_name,
        req.email.as_deref(),
    )
    .await
    {
        Ok(updated) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                StudentResponse::from_model(updated),
                "Student updated successfully",
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
