// src/presentation/http/middleware/cors.rs
use axum::{
    Router,
    http::{
        HeaderName, HeaderValue,
        header::{
            ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS,
            ACCESS_CONTROL_ALLOW_ORIGIN,
        },
    },
};
use tower_http::set_header::SetResponseHeaderLayer;

pub const ALLOWED_HEADERS: &str =
    "Origin, X-Requested-With, Content-Type, Accept, x-client-timestamp";

/// Stamps permissive cross-origin headers on every response, errors included.
#[must_use]
pub fn with_cors_headers(router: Router) -> Router {
    router
        .layer(overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(overriding(
            ACCESS_CONTROL_ALLOW_CREDENTIALS,
            HeaderValue::from_static("true"),
        ))
        .layer(overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        ))
}

fn overriding(name: HeaderName, value: HeaderValue) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(name, value)
}
