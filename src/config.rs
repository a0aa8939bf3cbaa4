//! Host process configuration and startup errors.
//!
//! Leptos options (site root, bind address) come from
//! `[package.metadata.leptos]` or the `LEPTOS_*` variables cargo-leptos
//! exports. `PORT` overrides only the port, for platforms that assign one.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::SocketAddr;

/// Errors that stop the host before or while serving.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// Leptos options could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HostConfig {
    pub port: Option<u16>,
}

impl HostConfig {
    /// Read `PORT` from the environment (after `.env` has been loaded).
    ///
    /// # Errors
    ///
    /// [`HostError::ConfigParse`] if `PORT` is set but not a valid port.
    pub fn from_env() -> Result<Self, HostError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        Ok(Self { port })
    }

    /// The Leptos bind address with `PORT` applied.
    #[must_use]
    pub fn listen_addr(&self, site_addr: SocketAddr) -> SocketAddr {
        match self.port {
            Some(port) => SocketAddr::new(site_addr.ip(), port),
            None => site_addr,
        }
    }
}

fn parse_port(raw: Option<&str>) -> Result<Option<u16>, HostError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    raw.parse::<u16>()
        .map(Some)
        .map_err(|e| HostError::ConfigParse(format!("invalid PORT '{raw}': {e}")))
}
