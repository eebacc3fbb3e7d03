// src/domain/timestamp.rs
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use std::fmt;

/// Timestamp supplied by the caller, echoed back unmodified.
///
/// Parsing is lenient on purpose: leading whitespace and an optional sign are
/// accepted, then the longest run of decimal digits is taken and anything
/// after it is ignored. `"123abc"` parses as `123`; `"abc"` is rejected.
/// There is no range limit: the value is kept as canonical decimal digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientTimestamp(String);

impl ClientTimestamp {
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(value.to_string())
    }

    /// # Errors
    ///
    /// Returns [`DomainError::InvalidTimestamp`] when `raw` has no leading integer.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        Self::parse_bytes(raw.as_bytes())
    }

    /// Byte-level variant of [`parse`](Self::parse); bytes after the digit
    /// run need not be valid UTF-8.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidTimestamp`] when `raw` has no leading integer.
    pub fn parse_bytes(raw: &[u8]) -> DomainResult<Self> {
        let start = raw
            .iter()
            .position(|b| !b.is_ascii_whitespace())
            .unwrap_or(raw.len());
        let trimmed = &raw[start..];

        let (negative, rest) = match trimmed.split_first() {
            Some((b'-', rest)) => (true, rest),
            Some((b'+', rest)) => (false, rest),
            _ => (false, trimmed),
        };

        let digits_len = rest.iter().take_while(|b| b.is_ascii_digit()).count();
        if digits_len == 0 {
            return Err(DomainError::InvalidTimestamp(format!(
                "no leading integer in {:?}",
                String::from_utf8_lossy(raw)
            )));
        }

        let digits = &rest[..digits_len];
        let significant = digits
            .iter()
            .position(|&b| b != b'0')
            .map_or(&b"0"[..], |first| &digits[first..]);

        let mut canonical = String::with_capacity(significant.len() + 1);
        if negative && significant != b"0" {
            canonical.push('-');
        }
        canonical.extend(significant.iter().map(|&b| char::from(b)));
        Ok(Self(canonical))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The value as `i64`, when it fits.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for ClientTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Server wall-clock time in milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServerTimestamp(i64);

impl ServerTimestamp {
    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<DateTime<Utc>> for ServerTimestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value.timestamp_millis())
    }
}

impl fmt::Display for ServerTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The `<client>,<server>` pair returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EchoPayload {
    pub client: ClientTimestamp,
    pub server: ServerTimestamp,
}

impl EchoPayload {
    #[must_use]
    pub const fn new(client: ClientTimestamp, server: ServerTimestamp) -> Self {
        Self { client, server }
    }
}

impl fmt::Display for EchoPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.client, self.server)
    }
}
