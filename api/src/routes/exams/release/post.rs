use crate::response::ApiResponse;
use crate::services::release::{self, ReleaseOutcome};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::exam;

/// POST /api/exams/{exam_id}/release
///
/// Publish an exam's results: every currently enrolled student with a score
/// gets a notification email, then the exam transitions to `released`.
/// Delivery failures do not block the release or the other recipients; they
/// are reported per student in the response.
///
/// Releasing an already-released exam is a no-op that sends nothing.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "released": true,
///     "already_released": false,
///     "sent": 2,
///     "skipped_no_email": 1,
///     "failed": 0,
///     "reports": [
///       { "student_id": 7, "student_name": "Amahle Zulu", "status": "sent" },
///       { "student_id": 8, "student_name": "Bongani Sithole", "status": "sent" },
///       { "student_id": 9, "student_name": "Lerato Dube", "status": "skipped_no_email" }
///     ]
///   },
///   "message": "Exam results released"
/// }
/// ```
///
/// - `404 Not Found` (unknown exam)
/// - `500 Internal Server Error` (the release state write failed; the exam
///   stays in draft)
pub async fn release_exam(
    State(state): State<AppState>,
    Path(exam_id): Path<i64>,
) -> impl IntoResponse {
    match exam::Model::get_by_id(state.db(), exam_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<ReleaseOutcome>::error("Exam not found")),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<ReleaseOutcome>::error(format!(
                    "Database error: {}",
                    e
                ))),
            );
        }
    }

    match release::release(state.db(), state.mailer().as_ref(), exam_id).await {
        Ok(outcome) => {
            let message = if outcome.already_released {
                "Exam results were already released"
            } else {
                "Exam results released"
            };
            (
                StatusCode::OK,
                Json(ApiResponse::success(outcome, message)),
            )
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<ReleaseOutcome>::error(format!(
                "Database error: {}",
                e
            ))),
        ),
    }
}
