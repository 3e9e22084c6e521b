//! Result release for a single exam.

use crate::state::AppState;
use axum::{Router, routing::post};

pub mod post;

use post::release_exam;

pub fn release_routes() -> Router<AppState> {
    Router::new().route("/", post(release_exam))
}
