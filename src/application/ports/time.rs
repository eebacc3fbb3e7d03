// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of the server timestamp paired with each echoed client value.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
