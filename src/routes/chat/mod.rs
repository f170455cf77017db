mod handlers;
mod requests;
pub mod render;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(handlers::index).post(handlers::run))
}
