use super::common::{ClassListResponse, ClassResponse};
use crate::response::ApiResponse;
use crate::routes::common::ListQuery;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::{class, enrollment};

/// GET /api/classes
///
/// List classes, paginated and optionally filtered.
///
/// ### Query Parameters
/// - `page` (default 1)
/// - `per_page` (default 20)
/// - `query`: case-insensitive substring match on name or code
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "classes": [
///       {
///         "id": 1,
///         "name": "Mathematics 10A",
///         "code": "MATH10A",
///         "subject": "Mathematics",
///         "student_count": 24,
///         "created_at": "2026-01-15T08:00:00+00:00",
///         "updated_at": "2026-01-15T08:00:00+00:00"
///       }
///     ],
///     "page": 1,
///     "per_page": 20,
///     "total": 1
///   },
///   "message": "Classes retrieved successfully"
/// }
/// ```
pub async fn list_classes(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> impl IntoResponse {
    let (rows, total) = match class::Model::filter(
        state.db(),
        params.page,
        params.per_page,
        params.query.as_deref(),
    )
    .await
    {
        Ok(res) => res,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<ClassListResponse>::error(format!(
                    "Database error: {}",
                    e
                ))),
            );
        }
    };

    let mut classes = Vec::with_capacity(rows.len());
    for row in rows {
        let count = match enrollment::Model::count_for_class(state.db(), row.id).await {
            Ok(count) => count,
            Err(e) => {
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::<ClassListResponse>::error(format!(
                        "Database error: {}",
                        e
                    ))),
                );
            }
        };
        classes.push(ClassResponse::from_model(row, count));
    }

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            ClassListResponse {
                classes,
                page: params.page,
                per_page: params.per_page,
                total,
            },
            "Classes retrieved successfully",
        )),
    )
}

/// GET /api/classes/{class_id}
///
/// Retrieve one class with its roster size.
///
/// ### Responses
///
/// - `200 OK` (same shape as a list entry)
/// - `404 Not Found`
/// ```json
/// {
///   "success": false,
///   "message": "Class not found"
/// }
/// ```
pub async fn get_class(
    State(state): State<AppState>,
    Path(class_id): Path<i64>,
) -> impl IntoResponse {
    match class::Model::get_by_id(state.db(), class_id).await {
        Ok(Some(found)) => {
            match enrollment::Model::count_for_class(state.db(), class_id).await {
                Ok(count) => (
                    StatusCode::OK,
                    Json(ApiResponse::success(
                        ClassResponse::from_model(found, count),
                        "Class retrieved successfully",
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
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<ClassResponse>::error("Class not found")),
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
