//! HTTP route entry point for `/api/...`.
//!
//! Routes are organized by domain, each protected via appropriate access
//! control middleware:
//! - `/health` → liveness check (public)
//! - `/auth` → login and current-account endpoints
//! - `/classes` → class CRUD and roster management (authenticated)
//! - `/students` → student CRUD (authenticated)
//! - `/exams` → exam CRUD, score sheets and result release (authenticated)

use crate::auth::guards::allow_authenticated;
use crate::routes::{
    auth::auth_routes, classes::classes_routes, exams::exams_routes, health::health_routes,
    students::students_routes,
};
use crate::state::AppState;
use axum::{Router, middleware::from_fn};

pub mod auth;
pub mod classes;
pub mod common;
pub mod exams;
pub mod health;
pub mod students;

/// Builds the complete application router for all HTTP endpoints.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/auth", auth_routes())
        .nest(
            "/classes",
            classes_routes().route_layer(from_fn(allow_authenticated)),
        )
        .nest(
            "/students",
            students_routes().route_layer(from_fn(allow_authenticated)),
        )
        .nest(
            "/exams",
            exams_routes().route_layer(from_fn(allow_authenticated)),
        )
        .with_state(app_state)
}
