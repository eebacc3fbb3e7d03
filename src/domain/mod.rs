// src/domain/mod.rs
pub mod errors;
pub mod timestamp;

pub use timestamp::{ClientTimestamp, EchoPayload, ServerTimestamp};
