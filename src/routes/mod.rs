pub mod api;
pub mod chat;

use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(chat::router())
        .nest("/api", api::router())
}
