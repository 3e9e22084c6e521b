use super::common::{StudentListResponse, StudentResponse};
use crate::response::ApiResponse;
use crate::routes::common::ListQuery;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::student;

/// GET /api/students
///
/// List students, paginated and optionally filtered.
///
/// ### Query Parameters
/// - `page` (default 1)
/// - `per_page` (default 20)
/// - `query`: substring match on name, student number or email
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "students": [
///       {
///         "id": 7,
///         "student_number": "S-1001",
///         "full_name": "Amahle Zulu",
///         "email": "amahle@school.test",
///         "created_at": "2026-01-15T08:00:00+00:00",
///         "updated_at": "2026-01-15T08:00:00+00:00"
///       }
///     ],
///     "page": 1,
///     "per_page": 20,
///     "total": 1
///   },
///   "message": "Students retrieved successfully"
/// }
/// ```
pub async fn list_students(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> impl IntoResponse {
    match student::Model::filter(
        state.db(),
        params.page,
        params.per_page,
        params.query.as_deref(),
    )
    .await
    {
        Ok((rows, total)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                StudentListResponse {
                    students: rows.into_iter().map(StudentResponse::from_model).collect(),
                    page: params.page,
                    per_page: params.per_page,
                    total,
                },
                "Students retrieved successfully",
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<StudentListResponse>::error(format!(
                "Database error: {}",
                e
            ))),
        ),
    }
}

/// GET /api/students/{student_id}
///
/// Retrieve one student record.
///
/// ### Responses
///
/// - `200 OK` (same shape as a list entry)
/// - `404 Not Found`
pub async fn get_student(
    State(state): State<AppState>,
    Path(student_id): Path<i64>,
) -> impl IntoResponse {
    match student::Model::get_by_id(state.db(), student_id).await {
        Ok(Some(found)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                StudentResponse::from_model(found),
                "Student retrieved successfully",
            )),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<StudentResponse>::error("Student not found")),
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
