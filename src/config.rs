//! Host process settings read from the environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid VIDAPLUS_BIND_ADDR: {0}")]
    InvalidBindAddr(String),
}

/// Where the SSR host listens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HostConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl HostConfig {
    /// Read `PORT` and `VIDAPLUS_BIND_ADDR` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if either variable is set but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset or blank keys use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a present value does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(raw) = non_blank(lookup("PORT")) {
            config.port = raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?;
        }
        if let Some(raw) = non_blank(lookup("VIDAPLUS_BIND_ADDR")) {
            config.bind_addr = raw.parse().map_err(|_| ConfigError::InvalidBindAddr(raw))?;
        }
        Ok(config)
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}
