//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SITE_ROOT: &str = "target/site";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ServerConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory holding the compiled `pkg/` bundle.
    pub site_root: String,
}

impl ServerConfig {
    /// Optional: `PORT` (default 3000), `SITE_ROOT` (default `target/site`).
    pub fn from_env() -> Result<Self, ServerConfigError> {
        Self::from_vars(std::env::var("PORT").ok().as_deref(), std::env::var("SITE_ROOT").ok().as_deref())
    }

    pub fn from_vars(port: Option<&str>, site_root: Option<&str>) -> Result<Self, ServerConfigError> {
        let port = match port.map(str::trim).filter(|p| !p.is_empty()) {
            Some(raw) => raw.parse::<u16>().map_err(|_| ServerConfigError::InvalidPort(raw.to_owned()))?,
            None => DEFAULT_PORT,
        };
        let site_root = site_root
            .map(|s| s.trim().trim_end_matches('/'))
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SITE_ROOT)
            .to_owned();
        Ok(Self { port, site_root })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
