// src/presentation/http/server.rs
use crate::{
    application::{ports::time::Clock, services::ApplicationServices},
    config::AppConfig,
    infrastructure::time::SystemClock,
    presentation::http::{routes::build_router, state::HttpState},
};
use std::{io, net::SocketAddr, sync::Arc};
use thiserror::Error;
use tokio::{
    net::TcpListener,
    sync::{oneshot, watch},
    task::JoinHandle,
};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("service is already started")]
    AlreadyStarted,
    #[error("service is not listening")]
    NotListening,
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
    #[error("server failure: {0}")]
    Serve(#[from] io::Error),
}

type CloseObserver = Box<dyn FnOnce() + Send + 'static>;

enum Lifecycle {
    Unbound,
    Listening(Running),
    Closed,
}

struct Running {
    local_addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<io::Result<()>>,
}

/// The time-echo HTTP service.
///
/// Constructed unbound; [`start`](Self::start) binds the listener and
/// [`stop`](Self::stop) drains it, releases the port and notifies every
/// close observer exactly once.
pub struct ClockService {
    config: AppConfig,
    services: Arc<ApplicationServices>,
    lifecycle: Lifecycle,
    observers: Vec<CloseObserver>,
    closed_tx: watch::Sender<bool>,
}

impl Default for ClockService {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl ClockService {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    #[must_use]
    pub fn with_clock(config: AppConfig, clock: Arc<dyn Clock>) -> Self {
        let (closed_tx, _) = watch::channel(false);
        Self {
            config,
            services: Arc::new(ApplicationServices::new(clock)),
            lifecycle: Lifecycle::Unbound,
            observers: Vec::new(),
            closed_tx,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    #[must_use]
    pub const fn local_addr(&self) -> Option<SocketAddr> {
        match &self.lifecycle {
            Lifecycle::Listening(running) => Some(running.local_addr),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_listening(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Listening(_))
    }

    #[must_use]
    pub const fn is_closed(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Closed)
    }

    /// Register a callback run once the service has fully closed.
    pub fn on_closed<F>(&mut self, observer: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Resolves once the service has been stopped; immediately if it already
    /// has. Dropping a listening service without stopping it never resolves.
    pub fn closed(&self) -> impl Future<Output = ()> + Send + use<> {
        let mut rx = self.closed_tx.subscribe();
        async move {
            if rx.wait_for(|closed| *closed).await.is_err() {
                std::future::pending::<()>().await;
            }
        }
    }

    /// Bind to `port`, or the configured port when `None`, and start serving.
    ///
    /// # Errors
    ///
    /// [`ServerError::AlreadyStarted`] unless the service is still unbound,
    /// [`ServerError::Bind`] when the address cannot be bound.
    pub async fn start(&mut self, port: Option<u16>) -> Result<SocketAddr, ServerError> {
        if !matches!(self.lifecycle, Lifecycle::Unbound) {
            return Err(ServerError::AlreadyStarted);
        }

        let addr = self.config.listen_addr(port);
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;
        let local_addr = listener.local_addr()?;

        let router = build_router(HttpState {
            services: Arc::clone(&self.services),
            cors_enabled: self.config.cors_enabled(),
        });

        let (shutdown, shutdown_rx) = oneshot::channel::<()>();
        let task = tokio::spawn(async move {
            axum::serve(listener, router.into_make_service())
                .with_graceful_shutdown(async move {
                    // A dropped sender also means shut down.
                    let _ = shutdown_rx.await;
                })
                .await
        });

        tracing::info!("listening on {local_addr}");
        self.lifecycle = Lifecycle::Listening(Running {
            local_addr,
            shutdown,
            task,
        });
        Ok(local_addr)
    }

    /// Stop accepting connections, wait for in-flight requests, release the
    /// port and notify observers.
    ///
    /// # Errors
    ///
    /// [`ServerError::NotListening`] when the service was never started or is
    /// already closed, [`ServerError::Serve`] when the serve task failed.
    pub async fn stop(&mut self) -> Result<(), ServerError> {
        let running = match std::mem::replace(&mut self.lifecycle, Lifecycle::Closed) {
            Lifecycle::Listening(running) => running,
            other => {
                self.lifecycle = other;
                return Err(ServerError::NotListening);
            }
        };

        let _ = running.shutdown.send(());
        let outcome = match running.task.await {
            Ok(result) => result.map_err(ServerError::from),
            Err(join_err) => Err(ServerError::Serve(io::Error::other(join_err))),
        };

        tracing::info!(address = %running.local_addr, "closed");
        self.emit_closed();
        outcome
    }

    fn emit_closed(&mut self) {
        for observer in self.observers.drain(..) {
            observer();
        }
        self.closed_tx.send_replace(true);
    }
}
