use super::common::{ExamRequest, ExamResponse, build_exam_response};
use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::format_validation_errors;
use db::models::{class, exam};
use validator::Validate;

/// PUT /api/exams/{exam_id}
///
/// Edit an exam. The body fully replaces class, name, date, total score and
/// the auto-release flag; the release status is not editable here.
///
/// ### Responses
///
/// - `200 OK` (updated exam, joined with its class)
/// - `400 Bad Request` (validation failure)
/// - `404 Not Found` (unknown exam or target class)
/// - `409 Conflict` (exam already released; released exams are frozen)
pub async fn edit_exam(
    State(state): State<AppState>,
    Path(exam_id): Path<i64>,
    Json(req): Json<ExamRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<ExamResponse>::error(error_message)),
        );
    }

    let existing = match exam::Model::get_by_id(state.db(), exam_id).await {
        Ok(Some(existing)) => existing,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<ExamResponse>::error("Exam not found")),
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
    };

    if existing.release_status == exam::ReleaseStatus::Released {
        return (
            StatusCode::CONFLICT,
            Json(ApiResponse::<ExamResponse>::error(
                "Exam has been released and can no longer be edited",
            )),
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

    let updated = match exam::Model::edit(
        state.db(),
        exam_id,
        req.class_id,
        &req.name,
        req.date,
        req.total_score,
        req.auto_release,
    )
    .await
    {
        Ok(updated) => updated,
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

    match build_exam_response(state.db(), updated).await {
        Ok(Some(response)) => (
            StatusCode::OK,
            Json(ApiResponse::success(response, "Exam updated successfully")),
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
