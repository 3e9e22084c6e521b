//! Class management route group.
//!
//! `/classes` covers class CRUD; `/classes/{class_id}/students` manages the
//! roster (enrollment) of a single class.

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
pub mod students;

use delete::delete_class;
use get::{get_class, list_classes};
use post::create_class;
use put::edit_class;

pub fn classes_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_classes))
        .route("/", post(create_class))
        .route("/{class_id}", get(get_class))
        .route("/{class_id}", put(edit_class))
        .route("/{class_id}", delete(delete_class))
        .nest("/{class_id}/students", students::students_routes())
}
