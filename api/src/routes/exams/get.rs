use super::common::{ExamListResponse, ExamResponse, build_exam_response};
use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::{class, exam};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ExamListQuery {
    /// Restrict the list to one class.
    pub class_id: Option<i64>,
}

/// GET /api/exams
///
/// List exams, newest exam date first, each joined with its class and grading
/// progress.
///
/// ### Query Parameters
/// - `class_id` (optional): restrict to one class; unknown ids are a 404
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "exams": [
///       {
///         "id": 3,
///         "class_id": 1,
///         "class_name": "Mathematics 10A",
///         "class_code": "MATH10A",
///         "name": "Midterm",
///         "date": "2026-09-10",
///         "total_score": 100,
///         "release_status": "draft",
///         "auto_release": false,
///         "graded_count": 18,
///         "total_students": 24,
///         "created_at": "2026-08-01T08:00:00+00:00",
///         "updated_at": "2026-08-01T08:00:00+00:00"
///       }
///     ]
///   },
///   "message": "Exams retrieved successfully"
/// }
/// ```
///
/// - `404 Not Found` (`class_id` given but unknown)
pub async fn list_exams(
    State(state): State<AppState>,
    Query(params): Query<ExamListQuery>,
) -> impl IntoResponse {
    let rows = match params.class_id {
        Some(class_id) => {
            match class::Model::get_by_id(state.db(), class_id).await {
                Ok(Some(_)) => {}
                Ok(None) => {
                    return (
                        StatusCode::NOT_FOUND,
                        Json(ApiResponse::<ExamListResponse>::error("Class not found")),
                    );
                }
                Err(e) => {
                    return (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(ApiResponse::<ExamListResponse>::error(format!(
                            "Database error: {}",
                            e
                        ))),
                    );
                }
            }
            exam::Model::get_for_class(state.db(), class_id).await
        }
        None => exam::Model::get_all(state.db()).await,
    };

    let rows = match rows {
        Ok(rows) => rows,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<ExamListResponse>::error(format!(
                    "Database error: {}",
                    e
                ))),
            );
        }
    };

    let mut exams = Vec::with_capacity(rows.len());
    for row in rows {
        match build_exam_response(state.db(), row).await {
            // A missing class can only happen in a race with class deletion;
            // the exam row is about to cascade away, so skip it.
            Ok(Some(response)) => exams.push(response),
            Ok(None) => {}
            Err(e) => {
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::<ExamListResponse>::error(format!(
                        "Database error: {}",
                        e
                    ))),
                );
            }
        }
    }

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            ExamListResponse { exams },
            "Exams retrieved successfully",
        )),
    )
}

/// GET /api/exams/{exam_id}
///
/// Retrieve one exam joined with its class and grading progress.
///
/// ### Responses
///
/// - `200 OK` (same shape as a list entry)
/// - `404 Not Found`
pub async fn get_exam(
    State(state): State<AppState>,
    Path(exam_id): Path<i64>,
) -> impl IntoResponse {
    let found = match exam::Model::get_by_id(state.db(), exam_id).await {
        Ok(Some(found)) => found,
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

    match build_exam_response(state.db(), found).await {
        Ok(Some(response)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                response,
                "Exam retrieved successfully",
            )),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<ExamResponse>::error("Exam not found")),
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
