// src/presentation/http/controllers/echo.rs
use crate::{
    application::error::ApplicationError,
    presentation::http::{
        error::{HttpError, HttpResult},
        extractors::MaybeClientTimestamp,
        state::HttpState,
    },
};
use axum::{
    Extension,
    http::{Method, StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};

/// Answers every path. GET with a readable `X-Client-Timestamp` gets
/// `<client>,<server>` back as plain text.
pub async fn echo_timestamp(
    Extension(state): Extension<HttpState>,
    method: Method,
    MaybeClientTimestamp(timestamp): MaybeClientTimestamp,
) -> HttpResult<Response> {
    if method == Method::OPTIONS && state.cors_enabled {
        return Ok(StatusCode::OK.into_response());
    }
    if method != Method::GET {
        return Err(HttpError::from_error(ApplicationError::invalid_method(
            method.as_str(),
        )));
    }

    let client = timestamp.map_err(HttpError::from_error)?;
    let payload = state.services.echo.echo(client);

    Ok(([(CONTENT_TYPE, "text/plain")], payload.to_string()).into_response())
}
