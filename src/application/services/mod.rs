// src/application/services/mod.rs
use std::sync::Arc;

use crate::application::ports::time::Clock;

mod echo;

pub use echo::EchoService;

pub struct ApplicationServices {
    pub echo: Arc<EchoService>,
}

impl ApplicationServices {
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        let echo = Arc::new(EchoService::new(Arc::clone(&clock)));
        Self { echo }
    }
}
