// config.rs
use crate::oracle::OracleSettings;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("Invalid value for {key}: {value:?}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
}

/// Process configuration, read from the environment (and `config.env`).
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub catalog_path: PathBuf,
    pub cors_origin: Option<String>,
    pub oracle: OracleSettings,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unset or blank keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = OracleSettings::default();

        let timeout_secs: u64 = parse_or(&get, "ORACLE_TIMEOUT_SECS", 10)?;
        let max_attempts: u32 = parse_or(&get, "ORACLE_MAX_ATTEMPTS", defaults.max_attempts)?;
        if max_attempts == 0 {
            return Err(ConfigError {
                key: "ORACLE_MAX_ATTEMPTS",
                value: "0".into(),
            });
        }

        Ok(Config {
            bind_addr: parse_or(&get, "BIND_ADDR", SocketAddr::from(([127, 0, 0, 1], 3000)))?,
            max_workers: parse_or(&get, "MAX_WORKERS", 8)?,
            catalog_path: get("CATALOG_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("data/products.json")),
            cors_origin: get("CORS_ORIGIN"),
            oracle: OracleSettings {
                quote_url: get("QUOTE_URL").unwrap_or(defaults.quote_url),
                symbol: get("QUOTE_SYMBOL").unwrap_or(defaults.symbol),
                timeout: Duration::from_secs(timeout_secs),
                max_attempts,
                backoff: defaults.backoff,
            },
        })
    }
}

fn parse_or<T, G>(get: &G, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError { key, value }),
    }
}
