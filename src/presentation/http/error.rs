// src/presentation/http/error.rs
use crate::application::error::ApplicationError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Status-only error response. Bodies are always empty.
#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    source: ApplicationError,
}

impl HttpError {
    #[must_use]
    pub const fn from_error(err: ApplicationError) -> Self {
        let status = match &err {
            ApplicationError::InvalidMethod(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApplicationError::MissingOrInvalidTimestamp(_) => StatusCode::BAD_REQUEST,
        };
        Self {
            status,
            source: err,
        }
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        tracing::debug!(status = %self.status, error = %self.source, "request rejected");
        self.status.into_response()
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_taxonomy_to_status_codes() {
        let method = HttpError::from_error(ApplicationError::invalid_method("POST"));
        assert_eq!(method.status(), StatusCode::METHOD_NOT_ALLOWED);

        let missing = HttpError::from_error(ApplicationError::missing_timestamp());
        assert_eq!(missing.status(), StatusCode::BAD_REQUEST);

        let invalid = HttpError::from_error(ApplicationError::invalid_timestamp("x"));
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn error_response_has_no_body_headers() {
        let resp = HttpError::from_error(ApplicationError::missing_timestamp()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(resp.headers().get("content-type").is_none());
    }
}
