//! Configuration settings and validation.

use std::net::{IpAddr, SocketAddr};

use crate::{Error, Result};

/// Log levels accepted by `validate`, compared case-insensitively.
const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main configuration for the keygate server.
#[derive(Debug, Clone)]
pub struct Config {
    /// IP address to bind to (IPv4 or IPv6 literal).
    pub host: String,

    /// Port to listen on.
    pub port: u16,

    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit logs as JSON.
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            log_json: false,
        }
    }
}

impl Config {
    /// Create a new configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration value is invalid.
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(Error::config("port cannot be 0"));
        }

        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(Error::config(format!(
                "invalid log level '{}', must be one of: {}",
                self.log_level,
                VALID_LOG_LEVELS.join(", ")
            )));
        }

        self.ip()?;

        Ok(())
    }

    /// Parse `host` as an IP address.
    ///
    /// # Errors
    ///
    /// Returns an error if `host` is empty or not an IP literal.
    pub fn ip(&self) -> Result<IpAddr> {
        if self.host.is_empty() {
            return Err(Error::config("host cannot be empty"));
        }

        self.host.parse().map_err(|e| {
            Error::config(format!("invalid host '{}': {e}", self.host))
        })
    }

    /// Get the socket address to bind to.
    ///
    /// # Errors
    ///
    /// Returns an error if `host` is not an IP literal.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        Ok(SocketAddr::new(self.ip()?, self.port))
    }
}
