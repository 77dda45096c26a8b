//! Application configuration module
//!
//! Provides the validated runtime configuration for the server and a builder
//! for assembling it from individual settings.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;

/// Default port for the HTTP server
pub const DEFAULT_PORT: u16 = 5000;

/// Lowest and highest bcrypt cost accepted
pub const MIN_PASSWORD_COST: u32 = 4;
pub const MAX_PASSWORD_COST: u32 = 31;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Interface to bind
    pub host: IpAddr,
    /// Port to bind
    pub port: u16,
    /// bcrypt cost used when hashing new passwords
    pub password_cost: u32,
    /// Reject messages whose sender or receiver has no account
    pub require_registered_participants: bool,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            password_cost: bcrypt::DEFAULT_COST,
            require_registered_participants: false,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PASSWORD_COST..=MAX_PASSWORD_COST).contains(&self.password_cost) {
            return Err(ConfigError::OutOfRange {
                key: "password_cost",
                value: self.password_cost.to_string(),
            });
        }
        Ok(())
    }

    /// Address the server listens on
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Builder for AppConfig
///
/// Unset values fall back to `AppConfig::default()`.
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    host: Option<IpAddr>,
    port: Option<u16>,
    password_cost: Option<u32>,
    require_registered_participants: Option<bool>,
    log_filter: Option<String>,
}

impl AppConfigBuilder {
    pub fn host(mut self, host: IpAddr) -> Self {
        self.host = Some(host);
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn password_cost(mut self, cost: u32) -> Self {
        self.password_cost = Some(cost);
        self
    }

    pub fn require_registered_participants(mut self, required: bool) -> Self {
        self.require_registered_participants = Some(required);
        self
    }

    pub fn log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        let config = AppConfig {
            host: self.host.unwrap_or(defaults.host),
            port: self.port.unwrap_or(defaults.port),
            password_cost: self.password_cost.unwrap_or(defaults.password_cost),
            require_registered_participants: self
                .require_registered_participants
                .unwrap_or(defaults.require_registered_participants),
            log_filter: self.log_filter.unwrap_or(defaults.log_filter),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("value for {key} out of range: {value}")]
    OutOfRange { key: &'static str, value: String },
}
