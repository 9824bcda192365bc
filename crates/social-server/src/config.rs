//! Server configuration loaded from the environment.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use tracing::info;

/// Default listen address when `SOCIAL_BIND_ADDRESS` is unset
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";

/// Prefix of the environment variables read by [`ServerConfig::load`]
pub const ENV_PREFIX: &str = "SOCIAL";

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server bind address (e.g. "0.0.0.0:8000")
    pub bind_address: String,
}

impl ServerConfig {
    /// Load configuration from `SOCIAL_*` environment variables.
    ///
    /// - `SOCIAL_BIND_ADDRESS`: listen address (default: "0.0.0.0:8000")
    pub fn load() -> Result<Self> {
        Self::from_env(config::Environment::with_prefix(ENV_PREFIX))
    }

    fn from_env(env: config::Environment) -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("bind_address", DEFAULT_BIND_ADDRESS)?
            .add_source(env)
            .build()
            .context("Failed to build configuration")?;

        let config: Self = settings
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        info!(bind_address = %config.bind_address, "configuration loaded");
        Ok(config)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_address
            .parse()
            .with_context(|| format!("Failed to parse bind address: {}", self.bind_address))
    }
}
