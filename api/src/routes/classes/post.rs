use super::common::{ClassRequest, ClassResponse};
use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use common::format_validation_errors;
use db::models::class;
use validator::Validate;

/// POST /api/classes
///
/// Create a class.
///
/// ### Request Body
/// ```json
/// {
///   "name": "Mathematics 10A",
///   "code": "MATH10A",
///   "subject": "Mathematics"
/// }
/// ```
///
/// ### Responses
///
/// - `201 Created`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": 1,
///     "name": "Mathematics 10A",
///     "code": "MATH10A",
///     "subject": "Mathematics",
///     "student_count": 0,
///     "created_at": "2026-01-15T08:00:00+00:00",
///     "updated_at": "2026-01-15T08:00:00+00:00"
///   },
///   "message": "Class created successfully"
/// }
/// ```
///
/// - `400 Bad Request` (validation failure)
/// - `409 Conflict` (duplicate code)
/// ```json
/// {
///   "success": false,
///   "message": "A class with this code already exists"
/// }
/// ```
pub async fn create_class(
    State(state): State<AppState>,
    Json(req): Json<ClassRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<ClassResponse>::error(error_message)),
        );
    }

    match class::Model::create(state.db(), &req.name, &req.code, req.subject.as_deref()).await {
        Ok(created) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                ClassResponse::from_model(created, 0),
                "Class created successfully",
            )),
        ),
        Err(e) if e.to_string().contains("classes.code") => (
            StatusCode::CONFLICT,
            Json(ApiResponse::<ClassResponse>::error(
                "A class with this code already exists",
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<ClassResponse>::error(format!(
                "Database error: {}",
                e
            ))),
        ),
    }
}
