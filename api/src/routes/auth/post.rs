use crate::auth::generate_jwt;
use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use common::format_validation_errors;
use db::models::user;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize, Default)]
pub struct LoginResponse {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub admin: bool,
    pub token: String,
    pub expires_at: String,
}

/// POST /api/auth/login
///
/// Authenticate a teacher account and issue a JWT.
///
/// ### Request Body
/// ```json
/// {
///   "email": "teacher@example.com",
///   "password": "strongpassword"
/// }
/// ```
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
///     "admin": false,
///     "token": "jwt_token_here",
///     "expires_at": "2026-08-30T11:00:00Z"
///   },
///   "message": "Login successful"
/// }
/// ```
///
/// - `400 Bad Request` (validation failure)
/// ```json
/// {
///   "success": false,
///   "message": "Invalid email format"
/// }
/// ```
///
/// - `401 Unauthorized` (unknown email or wrong password)
/// ```json
/// {
///   "success": false,
///   "message": "Invalid email or password"
/// }
/// ```
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<LoginResponse>::error(error_message)),
        );
    }

    match user::Model::verify_credentials(state.db(), &req.email, &req.password).await {
        Ok(Some(account)) => {
            let (token, expires_at) = generate_jwt(account.id, account.admin);
            let response = LoginResponse {
                id: account.id,
                email: account.email,
                username: account.username,
                admin: account.admin,
                token,
                expires_at,
            };
            (
                StatusCode::OK,
                Json(ApiResponse::success(response, "Login successful")),
            )
        }
        Ok(None) => (
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::<LoginResponse>::error(
                "Invalid email or password",
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<LoginResponse>::error(format!(
                "Database error: {}",
                e
            ))),
        ),
    }
}
