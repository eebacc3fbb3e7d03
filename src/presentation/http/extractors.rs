// src/presentation/http/extractors.rs
use crate::{
    application::{ApplicationResult, error::ApplicationError},
    domain::ClientTimestamp,
};
use axum::{
    extract::FromRequestParts,
    http::{HeaderName, HeaderValue, request::Parts},
};
use headers::{Header, HeaderMapExt};
use std::convert::Infallible;

pub static X_CLIENT_TIMESTAMP: HeaderName = HeaderName::from_static("x-client-timestamp");

/// Typed `X-Client-Timestamp` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XClientTimestamp(pub ClientTimestamp);

impl Header for XClientTimestamp {
    fn name() -> &'static HeaderName {
        &X_CLIENT_TIMESTAMP
    }

    fn decode<'i, I>(values: &mut I) -> Result<Self, headers::Error>
    where
        I: Iterator<Item = &'i HeaderValue>,
    {
        let value = values.next().ok_or_else(headers::Error::invalid)?;
        // Raw bytes: obs-text after the digits must not spoil the prefix.
        ClientTimestamp::parse_bytes(value.as_bytes())
            .map(Self)
            .map_err(|err| {
                tracing::debug!(error = %err, "rejecting x-client-timestamp");
                headers::Error::invalid()
            })
    }

    fn encode<E: Extend<HeaderValue>>(&self, values: &mut E) {
        if let Ok(value) = HeaderValue::from_str(self.0.as_str()) {
            values.extend(std::iter::once(value));
        }
    }
}

/// The client timestamp, or the reason it could not be read.
///
/// Never rejects: the handler decides what to do with a bad header only after
/// the method has been checked.
#[derive(Debug, Clone)]
pub struct MaybeClientTimestamp(pub ApplicationResult<ClientTimestamp>);

impl<S> FromRequestParts<S> for MaybeClientTimestamp
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let timestamp = match parts.headers.typed_try_get::<XClientTimestamp>() {
            Ok(Some(XClientTimestamp(ts))) => Ok(ts),
            Ok(None) => Err(ApplicationError::missing_timestamp()),
            Err(_) => Err(ApplicationError::invalid_timestamp(
                "header has no leading integer",
            )),
        };
        Ok(Self(timestamp))
    }
}
