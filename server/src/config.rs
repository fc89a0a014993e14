//! Host configuration parsed from environment variables.
//!
//! `.env` is loaded by `main` before this runs, so values there behave the
//! same as exported variables. Leptos site options are separate and come from
//! the workspace manifest through `get_configuration`.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PAGEBUILDER_HOST `{0}`: expected an IP address")]
    InvalidHost(String),
    #[error("invalid PORT `{0}`: expected 0-65535")]
    InvalidPort(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self { host: DEFAULT_HOST, port: DEFAULT_PORT }
    }
}

impl HostConfig {
    /// Build host config from environment variables.
    ///
    /// Optional:
    /// - `PAGEBUILDER_HOST` (default `127.0.0.1`)
    /// - `PORT` (default `3000`)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = parse_host(std::env::var("PAGEBUILDER_HOST").ok().as_deref())?;
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        Ok(Self { host, port })
    }

    #[must_use]
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_host(raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_HOST),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidHost(value.to_owned())),
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}
