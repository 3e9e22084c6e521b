//! Score sheet routes for a single exam.

use crate::state::AppState;
use axum::{
    Router,
    routing::{get, put},
};

pub mod get;
pub mod put;

use get::get_scores;
use put::save_scores;

pub fn scores_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_scores))
        .route("/", put(save_scores))
}
