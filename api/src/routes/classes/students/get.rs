use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::{class, enrollment, student};
use serde::Serialize;

#[derive(Debug, Serialize, Default)]
pub struct RosterResponse {
    pub class_id: i64,
    pub students: Vec<student::Model>,
}

/// GET /api/classes/{class_id}/students
///
/// The current roster of a class, ordered by student name.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "class_id": 1,
///     "students": [
///       {
///         "id": 7,
///         "student_number": "S-1001",
///         "full_name": "Amahle Zulu",
///         "email": "amahle@school.test",
///         "created_at": "2026-01-15T08:00:00Z",
///         "updated_at": "2026-01-15T08:00:00Z"
///       }
///     ]
///   },
///   "message": "Roster retrieved successfully"
/// }
/// ```
///
/// - `404 Not Found` (unknown class)
pub async fn get_roster(
    State(state): State<AppState>,
    Path(class_id): Path<i64>,
) -> impl IntoResponse {
    match class::Model::get_by_id(state.db(), class_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<RosterResponse>::error("Class not found")),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<RosterResponse>::error(format!(
                    "Database error: {}",
                    e
                ))),
            );
        }
    }

    match enrollment::Model::roster(state.db(), class_id).await {
        Ok(students) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                RosterResponse { class_id, students },
                "Roster retrieved successfully",
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<RosterResponse>::error(format!(
                "Database error: {}",
                e
            ))),
        ),
    }
}
