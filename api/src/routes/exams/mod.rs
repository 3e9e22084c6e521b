//! Exam management route group.
//!
//! `/exams` covers exam CRUD; `/exams/{exam_id}/scores` reads and overwrites
//! the score sheet; `/exams/{exam_id}/release` publishes results and fans out
//! notification emails.

use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;
pub mod release;
pub mod scores;

use delete::delete_exam;
use get::{get_exam, list_exams};
use post::create_exam;
use put::edit_exam;

pub fn exams_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_exams))
        .route("/", post(create_exam))
        .route("/{exam_id}", get(get_exam))
        .route("/{exam_id}", put(edit_exam))
        .route("/{exam_id}", delete(delete_exam))
        .nest("/{exam_id}/scores", scores::scores_routes())
        .nest("/{exam_id}/release", release::release_routes())
}
