//! clockecho: a stateless HTTP time-echo service.
//!
//! A client sends its own timestamp in `X-Client-Timestamp`; the service
//! answers `<client>,<server>` with its wall-clock time in epoch milliseconds,
//! letting the client estimate clock offset and round-trip latency.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use config::{AppConfig, DEFAULT_PORT};
pub use presentation::http::server::{ClockService, ServerError};
