use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::enrollment;

/// DELETE /api/classes/{class_id}/students/{student_id}
///
/// Remove a student from a class. Their stored exam results are kept but stop
/// counting toward graded totals and release dispatch.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {},
///   "message": "Student unenrolled successfully"
/// }
/// ```
///
/// - `404 Not Found` (the student is not enrolled in this class)
pub async fn unenroll_student(
    State(state): State<AppState>,
    Path((class_id, student_id)): Path<(i64, i64)>,
) -> impl IntoResponse {
    match enrollment::Model::unenroll(state.db(), class_id, student_id).await {
        Ok(true) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                Empty::default(),
                "Student unenrolled successfully",
            )),
        ),
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Empty>::error(
                "Student is not enrolled in this class",
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!("Database error: {}", e))),
        ),
    }
}
