use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::class;

/// DELETE /api/classes/{class_id}
///
/// Delete a class. Its enrollments and exams (with their results) are removed
/// with it.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {},
///   "message": "Class deleted successfully"
/// }
/// ```
///
/// - `404 Not Found`
pub async fn delete_class(
    State(state): State<AppState>,
    Path(class_id): Path<i64>,
) -> impl IntoResponse {
    match class::Model::delete(state.db(), class_id).await {
        Ok(true) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                Empty::default(),
                "Class deleted successfully",
            )),
        ),
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Empty>::error("Class not found")),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!("Database error: {}", e))),
        ),
    }
}
