//! Authentication route group: login and current-account lookup.

use crate::auth::guards::allow_authenticated;
use crate::state::AppState;
use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post},
};

pub mod get;
pub mod post;

use get::me;
use post::login;

pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/login", post(login)).route(
        "/me",
        get(me).route_layer(from_fn(allow_authenticated)),
    )
}
