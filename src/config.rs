//! Application configuration loaded from environment variables.

use std::net::{Ipv4Addr, SocketAddr};

use serde::Deserialize;

use crate::error::{AppError, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Application name echoed by `/app-name`.
    #[serde(default)]
    pub app_name: Option<String>,

    /// Log filter directive (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            app_name: None,
            rust_log: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Build configuration from key/value pairs.
    ///
    /// Empty values count as unset, so `PORT=` falls back to the default port
    /// and `APP_NAME=` yields no application name.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(_, v)| !v.is_empty());

        envy::from_iter(vars).map_err(AppError::Config)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(AppError::InvalidConfig(
                "PORT must be a positive integer".to_string(),
            ));
        }

        Ok(())
    }

    /// Address the HTTP server listens on.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
