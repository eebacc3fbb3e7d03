// src/config.rs
use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
};
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 5579;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    host: IpAddr,
    port: u16,
    cors_enabled: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

const fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: DEFAULT_PORT,
            cors_enabled: false,
        }
    }
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to the
    /// built-in defaults for anything unset.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] when `PORT` or `LISTEN_HOST` cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let host = match lookup("LISTEN_HOST") {
            Some(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::Invalid(format!("LISTEN_HOST is not an IP address: {raw}")))?,
            None => default_host(),
        };

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid(format!("PORT is not a valid port: {raw}")))?,
            None => DEFAULT_PORT,
        };

        let cors_enabled = lookup("CORS_ENABLED")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(Self {
            host,
            port,
            cors_enabled,
        })
    }

    #[must_use]
    pub const fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    #[must_use]
    pub const fn with_cors(mut self, enabled: bool) -> Self {
        self.cors_enabled = enabled;
        self
    }

    #[must_use]
    pub const fn host(&self) -> IpAddr {
        self.host
    }

    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    #[must_use]
    pub const fn cors_enabled(&self) -> bool {
        self.cors_enabled
    }

    /// Resolve the bind address: an explicit port wins over the configured one.
    #[must_use]
    pub const fn listen_addr(&self, port: Option<u16>) -> SocketAddr {
        let port = match port {
            Some(port) => port,
            None => self.port,
        };
        SocketAddr::new(self.host, port)
    }
}
