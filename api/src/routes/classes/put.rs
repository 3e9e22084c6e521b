use super::common::{ClassRequest, ClassResponse};
use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::format_validation_errors;
use db::models::{class, enrollment};
use validator::Validate;

/// PUT /api/classes/{class_id}
///
/// Edit a class. The request body fully replaces name, code and subject.
///
/// ### Request Body
/// ```json
/// {
///   "name": "Mathematics 10B",
///   "code": "MATH10B",
///   "subject": null
/// }
/// ```
///
/// ### Responses
///
/// - `200 OK` (updated class, same shape as GET)
/// - `400 Bad Request` (validation failure)
/// - `404 Not Found`
/// - `409 Conflict` (code already used by another class)
pub async fn edit_class(
    State(state): State<AppState>,
    Path(class_id): Path<i64>,
    Json(req): Json<ClassRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<ClassResponse>::error(error_message)),
        );
    }

    match class::Model::get_by_id(state.db(), class_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<ClassResponse>::error("Class not found")),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<ClassResponse>::error(format!(
                    "Database error: {}",
                    e
                ))),
            );
        }
    }

    match class::Model::edit(
        state.db(),
        class_id,
        &req.name,
        &req.code,
        req.subject.as_deref(),
    )
    .await
    {
        Ok(updated) => {
            let count = enrollment::Model::count_for_class(state.db(), class_id)
                .await
                .unwrap_or(0);
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    ClassResponse::from_model(updated, count),
                    "Class updated successfully",
                )),
            )
        }
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
