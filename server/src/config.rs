//! Host server configuration parsed from environment variables.

use std::net::{Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid TCP port.
    #[error("invalid PORT '{value}': {reason}")]
    InvalidPort { value: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port on all interfaces, default 3000
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        Ok(Self { port })
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_PORT);
    };
    raw.trim()
        .parse::<u16>()
        .map_err(|e| ConfigError::InvalidPort { value: raw.to_owned(), reason: e.to_string() })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
