//! Process configuration read from the environment.

use std::{str::FromStr, time::Duration};

#[derive(Debug, Clone)]
pub struct Config {
    /// Connection string, with `sslmode` defaulted (see [`with_default_sslmode`]).
    pub database_url: String,
    /// True when `sslmode=disable` was appended because the URL had none.
    pub sslmode_defaulted: bool,
    pub port: u16,
    pub service_name: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub query_timeout: Duration,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),
    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url = lookup("DATABASE_URL")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let (database_url, sslmode_defaulted) = with_default_sslmode(&raw_url);

        let service_name = lookup("SERVICE_NAME")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "seesea-api".to_string());

        Ok(Self {
            database_url,
            sslmode_defaulted,
            port: parse_or(&lookup, "PORT", 8080)?,
            service_name,
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 10)?,
            acquire_timeout: Duration::from_secs(parse_or(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", 5)?),
            query_timeout: Duration::from_secs(parse_or(&lookup, "DB_QUERY_TIMEOUT_SECS", 10)?),
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name).filter(|v| !v.is_empty()) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

/// Appends `sslmode=disable` when the URL does not choose a TLS mode itself.
///
/// Returns the resulting URL and whether the default was applied.
pub fn with_default_sslmode(url: &str) -> (String, bool) {
    if url.contains("sslmode") {
        return (url.to_string(), false);
    }
    let separator = if url.contains('?') { '&' } else { '?' };
    (format!("{url}{separator}sslmode=disable"), true)
}
