use axum::{middleware as ax_middleware, Router};
use tower_http::{
    compression::CompressionLayer, decompression::RequestDecompressionLayer, limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

use crate::{
    constants::REQUEST_BODY_LIMIT, error_handlers::handler_404, middleware as fc_middleware,
    routes, state::AppState,
};

/// The full service: routes, fallback and middleware stack.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::router())
        .fallback(handler_404)
        // Keep below request_id().
        .layer(ax_middleware::from_fn(fc_middleware::response_meta))
        .layer(TraceLayer::new_for_http())
        .layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .deflate(true)
                .zstd(true),
        )
        .layer(
            RequestDecompressionLayer::new()
                .br(true)
                .gzip(true)
                .deflate(true)
                .zstd(true),
        )
        .layer(RequestBodyLimitLayer::new(REQUEST_BODY_LIMIT))
        // No TimeoutLayer: a flow run may take as long as the remote takes.
        .layer(ax_middleware::from_fn(fc_middleware::request_id))
        .with_state(state)
}
