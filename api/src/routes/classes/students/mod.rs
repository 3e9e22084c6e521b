//! Roster management for a single class.

use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

pub mod delete;
pub mod get;
pub mod post;

use delete::unenroll_student;
use get::get_roster;
use post::enroll_student;

pub fn students_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_roster))
        .route("/", post(enroll_student))
        .route("/{student_id}", delete(unenroll_student))
}
