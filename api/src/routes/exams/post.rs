use super::common::{ExamRequest, ExamResponse, build_exam_response};
use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use common::format_validation_errors;
use db::models::{class, exam};
use validator::Validate;

/// POST /api/exams
///
/// Create an exam for a class. New exams always start in draft.
///
/// ### Request Body
/// ```json
/// {
///   "class_id": 1,
///   "name": "Midterm",
///   "date": "2026-09-10",
///   "total_score": 100,
///   "auto_release": false
/// }
/// ```
///
/// ### Responses
///
/// - `201 Created` (the new exam, joined with its class)
/// - `400 Bad Request` (validation failure)
/// - `404 Not Found` (unknown class)
pub async fn create_exam(
    State(state): State<AppState>,
    Json(req): Json<ExamRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<ExamResponse>::error(error_message)),
        );
    }

    match class::Model::get_by_id(state.db(), req.class_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<ExamResponse>::error("Class not found")),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<ExamResponse>::error(format!(
                    "Database error: {}",
                    e
                ))),
            );
        }
    }

    let created = match exam::Model::create(
        state.db(),
        req.class_id,
        &req.name,
        req.date,
        req.total_score,
        req.auto_release,
    )
    .await
    {
        Ok(created) => created,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<ExamResponse>::error(format!(
                    "Database error: {}",
                    e
                ))),
            );
        }
    };

    match build_exam_response(state.db(), created).await {
        Ok(Some(response)) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(response, "Exam created successfully")),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<ExamResponse>::error("Class not found")),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<ExamResponse>::error(format!(
                "Database error: {}",
                e
            ))),
        ),
    }
}
