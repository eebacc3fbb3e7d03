// src/application/error.rs
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    #[error("method not allowed: {0}")]
    InvalidMethod(String),

    #[error("missing or invalid client timestamp: {0}")]
    MissingOrInvalidTimestamp(String),
}

impl ApplicationError {
    #[must_use]
    pub fn invalid_method(method: impl Into<String>) -> Self {
        Self::InvalidMethod(method.into())
    }

    #[must_use]
    pub fn missing_timestamp() -> Self {
        Self::MissingOrInvalidTimestamp("header not present".into())
    }

    #[must_use]
    pub fn invalid_timestamp(msg: impl Into<String>) -> Self {
        Self::MissingOrInvalidTimestamp(msg.into())
    }
}
