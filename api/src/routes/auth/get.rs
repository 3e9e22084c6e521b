use crate::auth::claims::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::user;
use serde::Serialize;

#[derive(Debug, Serialize, Default)]
pub struct MeResponse {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub admin: bool,
}

/// GET /api/auth/me
///
/// Return the account behind the presented bearer token.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": 1,
///     "email": "teacher@example.com",
///     "username": "tdlamini",
///     "admin": false
///   },
///   "message": "Account retrieved successfully"
/// }
/// ```
///
/// - `401 Unauthorized` (missing, expired or malformed token)
/// - `404 Not Found` (token is valid but the account was deleted)
pub async fn me(State(state): State<AppState>, AuthUser(claims): AuthUser) -> impl IntoResponse {
    match user::Model::get_by_id(state.db(), claims.sub).await {
        Ok(Some(account)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                MeResponse {
                    id: account.id,
                    email: account.email,
                    username: account.username,
                    admin: account.admin,
                },
                "Account retrieved successfully",
            )),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<MeResponse>::error("Account not found")),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<MeResponse>::error(format!(
                "Database error: {}",
                e
            ))),
        ),
    }
}
