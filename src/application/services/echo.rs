// src/application/services/echo.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{ClientTimestamp, EchoPayload, ServerTimestamp},
};

/// Pairs a caller's timestamp with the server's current time.
pub struct EchoService {
    clock: Arc<dyn Clock>,
}

impl EchoService {
    #[must_use]
    pub const fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    #[must_use]
    pub fn echo(&self, client: ClientTimestamp) -> EchoPayload {
        // Sampled here so the server time reflects the moment the response is built.
        let server = ServerTimestamp::from(self.clock.now());
        EchoPayload::new(client, server)
    }
}
