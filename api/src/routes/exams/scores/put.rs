use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::{enrollment, exam, exam_result};
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Debug, Deserialize)]
pub struct ScoreEntry {
    pub student_id: i64,
    /// `null` keeps the cell blank.
    pub score: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct SaveScoresRequest {
    pub scores: Vec<ScoreEntry>,
}

/// PUT /api/exams/{exam_id}/scores
///
/// Overwrite the entire score sheet of an exam. This is a full replacement,
/// never a merge: a student omitted from the body loses their stored score.
/// Validation is all-or-nothing; one bad entry rejects the whole sheet and
/// nothing is written.
///
/// ### Request Body
/// ```json
/// {
///   "scores": [
///     { "student_id": 7, "score": 82 },
///     { "student_id": 8, "score": null }
///   ]
/// }
/// ```
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {},
///   "message": "Scores saved successfully"
/// }
/// ```
///
/// - `400 Bad Request` (a score outside `[0, total_score]`, a duplicate
///   student, or a student not on the class roster)
/// - `404 Not Found` (unknown exam)
/// - `409 Conflict` (exam already released; released score sheets are frozen)
/// ```json
/// {
///   "success": false,
///   "message": "Exam has been released and scores can no longer be changed"
/// }
/// ```
pub async fn save_scores(
    State(state): State<AppState>,
    Path(exam_id): Path<i64>,
    Json(req): Json<SaveScoresRequest>,
) -> impl IntoResponse {
    let found = match exam::Model::get_by_id(state.db(), exam_id).await {
        Ok(Some(found)) => found,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Empty>::error("Exam not found")),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error(format!("Database error: {}", e))),
            );
        }
    };

    if found.release_status == exam::ReleaseStatus::Released {
        return (
            StatusCode::CONFLICT,
            Json(ApiResponse::<Empty>::error(
                "Exam has been released and scores can no longer be changed",
            )),
        );
    }

    let roster: HashSet<i64> = match enrollment::Model::roster_ids(state.db(), found.class_id)
        .await
    {
        Ok(ids) => ids.into_iter().collect(),
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error(format!("Database error: {}", e))),
            );
        }
    };

    let mut seen = HashSet::new();
    for entry in &req.scores {
        if !roster.contains(&entry.student_id) {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<Empty>::error(format!(
                    "Student {} is not enrolled in this class",
                    entry.student_id
                ))),
            );
        }
        if !seen.insert(entry.student_id) {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<Empty>::error(format!(
                    "Student {} appears more than once",
                    entry.student_id
                ))),
            );
        }
        if let Some(score) = entry.score {
            if score < 0 || score > found.total_score {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ApiResponse::<Empty>::error(format!(
                        "Score for student {} must be between 0 and {}",
                        entry.student_id, found.total_score
                    ))),
                );
            }
        }
    }

    let entries: Vec<(i64, Option<i32>)> = req
        .scores
        .iter()
        .map(|entry| (entry.student_id, entry.score))
        .collect();

    match exam_result::Model::replace_for_exam(state.db(), exam_id, &entries).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                Empty::default(),
                "Scores saved successfully",
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!("Database error: {}", e))),
        ),
    }
}
