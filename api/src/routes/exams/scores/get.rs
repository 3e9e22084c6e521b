use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::{enrollment, exam, exam_result};
use serde::Serialize;
use std::collections::HashMap;

/// One row of the score sheet: an enrolled student and their stored score,
/// `null` when ungraded.
#[derive(Debug, Serialize)]
pub struct ScoreSheetRow {
    pub student_id: i64,
    pub student_number: String,
    pub full_name: String,
    pub score: Option<i32>,
}

#[derive(Debug, Serialize, Default)]
pub struct ScoreSheetResponse {
    pub exam_id: i64,
    pub exam_name: String,
    pub total_score: i32,
    pub release_status: String,
    pub rows: Vec<ScoreSheetRow>,
}

/// GET /api/exams/{exam_id}/scores
///
/// The score sheet for an exam: one row per currently enrolled student,
/// ordered by name. Stored scores for since-unenrolled students are not
/// shown.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "exam_id": 3,
///     "exam_name": "Midterm",
///     "total_score": 100,
///     "release_status": "draft",
///     "rows": [
///       {
///         "student_id": 7,
///         "student_number": "S-1001",
///         "full_name": "Amahle Zulu",
///         "score": 82
///       },
///       {
///         "student_id": 8,
///         "student_number": "S-1002",
///         "full_name": "Bongani Sithole",
///         "score": null
///       }
///     ]
///   },
///   "message": "Scores retrieved successfully"
/// }
/// ```
///
/// - `404 Not Found` (unknown exam)
pub async fn get_scores(
    State(state): State<AppState>,
    Path(exam_id): Path<i64>,
) -> impl IntoResponse {
    let found = match exam::Model::get_by_id(state.db(), exam_id).await {
        Ok(Some(found)) => found,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<ScoreSheetResponse>::error("Exam not found")),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<ScoreSheetResponse>::error(format!(
                    "Database error: {}",
                    e
                ))),
            );
        }
    };

    let roster = match enrollment::Model::roster(state.db(), found.class_id).await {
        Ok(roster) => roster,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<ScoreSheetResponse>::error(format!(
                    "Database error: {}",
                    e
                ))),
            );
        }
    };

    let results = match exam_result::Model::get_for_exam(state.db(), exam_id).await {
        Ok(results) => results,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<ScoreSheetResponse>::error(format!(
                    "Database error: {}",
                    e
                ))),
            );
        }
    };

    let scores: HashMap<i64, Option<i32>> =
        results.into_iter().map(|r| (r.student_id, r.score)).collect();

    let rows = roster
        .into_iter()
        .map(|student| ScoreSheetRow {
            score: scores.get(&student.id).copied().flatten(),
            student_id: student.id,
            student_number: student.student_number,
            full_name: student.full_name,
        })
        .collect();

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            ScoreSheetResponse {
                exam_id: found.id,
                exam_name: found.name,
                total_score: found.total_score,
                release_status: found.release_status.to_string(),
                rows,
            },
            "Scores retrieved successfully",
        )),
    )
}
