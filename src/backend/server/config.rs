/**
 * Server Configuration
 *
 * This module loads `AppConfig` from environment variables.
 *
 * # Configuration Sources
 *
 * | Variable                          | Setting                           |
 * |-----------------------------------|-----------------------------------|
 * | `SERVER_HOST`                     | bind address                      |
 * | `SERVER_PORT`                     | bind port                         |
 * | `BCRYPT_COST`                     | password hashing cost             |
 * | `REQUIRE_REGISTERED_PARTICIPANTS` | reject messages from/to strangers |
 * | `RUST_LOG`                        | tracing filter                    |
 *
 * Unset variables keep their defaults. Values that fail to parse are errors,
 * not silently replaced.
 */

use std::str::FromStr;

use crate::shared::config::{AppConfig, ConfigError};

/// Load configuration from the process environment
///
/// `.env` loading is the caller's job (the binary does it before calling this).
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(|key| std::env::var(key).ok())
}

/// Load configuration through an arbitrary variable lookup
pub fn load_config_from<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
{
    let mut builder = AppConfig::builder();

    if let Some(host) = parse_var(&lookup, "SERVER_HOST")? {
        builder = builder.host(host);
    }
    if let Some(port) = parse_var(&lookup, "SERVER_PORT")? {
        builder = builder.port(port);
    }
    if let Some(cost) = parse_var(&lookup, "BCRYPT_COST")? {
        builder = builder.password_cost(cost);
    }
    if let Some(raw) = lookup("REQUIRE_REGISTERED_PARTICIPANTS") {
        builder = builder.require_registered_participants(parse_flag(
            "REQUIRE_REGISTERED_PARTICIPANTS",
            &raw,
        )?);
    }
    if let Some(filter) = lookup("RUST_LOG") {
        builder = builder.log_filter(filter);
    }

    let config = builder.build()?;
    tracing::debug!("Loaded configuration: {:?}", config);
    Ok(config)
}

fn parse_var<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
    }
}

fn parse_flag(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: raw.to_string(),
        }),
    }
}
