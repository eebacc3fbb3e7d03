// src/presentation/http/routes.rs
use crate::presentation::http::{
    controllers::echo, middleware::cors::with_cors_headers, state::HttpState,
};
use axum::{Extension, Router};
use tower_http::trace::TraceLayer;

/// Every path and method lands on the echo handler, which does its own
/// method check so rejections stay status-only.
#[must_use]
pub fn build_router(state: HttpState) -> Router {
    let cors_enabled = state.cors_enabled;

    let router = Router::new()
        .fallback(echo::echo_timestamp)
        .layer(TraceLayer::new_for_http());

    let router = if cors_enabled {
        with_cors_headers(router)
    } else {
        router
    };

    router.layer(Extension(state))
}
