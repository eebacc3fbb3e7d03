// tests/support/mocks.rs
use chrono::{DateTime, Utc};
use clockecho::application::ports::time::Clock;
use once_cell::sync::Lazy;

/// Fixed server time used by router-level tests.
pub static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00.250Z")
        .expect("invalid RFC3339 in tests/support/mocks.rs")
        .with_timezone(&Utc)
});

pub const FIXED_NOW_MILLIS: i64 = 1_704_067_200_250;

pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *FIXED_NOW
    }
}
