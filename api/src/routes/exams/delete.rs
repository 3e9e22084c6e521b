use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::exam;

/// DELETE /api/exams/{exam_id}
///
/// Delete an exam and its score sheet.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {},
///   "message": "Exam deleted successfully"
/// }
/// ```
///
/// - `404 Not Found`
pub async fn delete_exam(
    State(state): State<AppState>,
    Path(exam_id): Path<i64>,
) -> impl IntoResponse {
    match exam::Model::delete(state.db(), exam_id).await {
        Ok(true) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                Empty::default(),
                "Exam deleted successfully",
            )),
        ),
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Empty>::error("Exam not found")),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!("Database error: {}", e))),
        ),
    }
}
