//! Environment-driven settings for the web app and the stub service.

use anyhow::{Context, Result};
use std::env;
use std::fmt::Display;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

pub const DEFAULT_SENTIMENT_API_URL: &str = "http://fastapi:8001";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Settings for the comment form server.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub sentiment_api_url: String,
    /// Whole-request timeout for the outbound call.
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            bind_addr: try_load("BIND_ADDR", "0.0.0.0:8000")?,
            sentiment_api_url: try_load("SENTIMENT_API_URL", DEFAULT_SENTIMENT_API_URL)?,
            request_timeout: Duration::from_secs(try_load(
                "SENTIMENT_TIMEOUT_SECS",
                &DEFAULT_TIMEOUT_SECS.to_string(),
            )?),
            connect_timeout: Duration::from_secs(try_load(
                "SENTIMENT_CONNECT_TIMEOUT_SECS",
                &DEFAULT_CONNECT_TIMEOUT_SECS.to_string(),
            )?),
            static_dir: try_load("STATIC_DIR", "static")?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            sentiment_api_url: DEFAULT_SENTIMENT_API_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            static_dir: "static".to_string(),
        }
    }
}

/// Settings for the development sentiment stub.
#[derive(Debug, Clone)]
pub struct StubConfig {
    pub bind_addr: SocketAddr,
    pub cors_allow_origin: String,
}

impl StubConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            bind_addr: try_load("STUB_BIND_ADDR", "0.0.0.0:8001")?,
            cors_allow_origin: try_load("CORS_ALLOW_ORIGIN", "http://localhost:8000")?,
        })
    }
}

fn try_load<T>(key: &str, default: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    parse_value(key, &raw)
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim()
        .parse()
        .map_err(|e: T::Err| anyhow::anyhow!("{e}"))
        .with_context(|| format!("Invalid {key} value: {raw:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_values() {
        let secs: u64 = parse_value("SENTIMENT_TIMEOUT_SECS", " 30 ").unwrap();
        assert_eq!(secs, 30);
    }

    #[test]
    fn rejects_garbage_with_key_in_message() {
        let err = parse_value::<u64>("SENTIMENT_TIMEOUT_SECS", "soon").unwrap_err();
        assert!(err.to_string().contains("SENTIMENT_TIMEOUT_SECS"));
    }

    #[test]
    fn parses_socket_addresses() {
        let addr: SocketAddr = parse_value("BIND_ADDR", "127.0.0.1:9000").unwrap();
        assert_eq!(addr.port(), 9000);
    }

    #[test]
    fn defaults_point_at_compose_service() {
        let config = Config::default();
        assert_eq!(config.sentiment_api_url, "http://fastapi:8001");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
    }
}
