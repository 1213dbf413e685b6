//! Environment-driven configuration.
//!
//! | Variable                       | Default                              |
//! |--------------------------------|--------------------------------------|
//! | `COINGECKO_API_URL`            | `https://api.coingecko.com/api/v3`   |
//! | `COINGECKO_API_KEY`            | unset (free, rate-limited tier)      |
//! | `COINBOARD_REQUEST_TIMEOUT_MS` | `10000`                              |
//! | `COINBOARD_BIND`               | `127.0.0.1:5000`                     |
//! | `COINBOARD_LOG_FORMAT`         | `pretty` (`json` also accepted)      |

use crate::error::MarketError;
use crate::network::{DEFAULT_API_URL, DEFAULT_REQUEST_TIMEOUT};
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// Log output format for the binary's subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Some(LogFormat::Pretty),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }

    /// Install the global tracing subscriber. `RUST_LOG` overrides the `info` default.
    #[cfg(feature = "server")]
    pub fn init(&self) {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        match self {
            LogFormat::Json => {
                fmt().json().with_env_filter(filter).init();
            }
            LogFormat::Pretty => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub api_key: Option<String>,
    pub request_timeout: Duration,
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, MarketError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, MarketError> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Config::default();

        let request_timeout = match var("COINBOARD_REQUEST_TIMEOUT_MS") {
            Some(raw) => {
                let millis: u64 = raw.trim().parse().map_err(|_| {
                    MarketError::Validation(format!(
                        "COINBOARD_REQUEST_TIMEOUT_MS must be an integer, got {:?}",
                        raw
                    ))
                })?;
                if millis == 0 {
                    return Err(MarketError::Validation(
                        "COINBOARD_REQUEST_TIMEOUT_MS must be greater than zero".to_string(),
                    ));
                }
                Duration::from_millis(millis)
            }
            None => defaults.request_timeout,
        };

        let bind_addr = match var("COINBOARD_BIND") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                MarketError::Validation(format!("COINBOARD_BIND is not a socket address: {:?}", raw))
            })?,
            None => defaults.bind_addr,
        };

        let log_format = match var("COINBOARD_LOG_FORMAT") {
            Some(raw) => LogFormat::from_str(&raw).ok_or_else(|| {
                MarketError::Validation(format!("COINBOARD_LOG_FORMAT must be pretty or json, got {:?}", raw))
            })?,
            None => defaults.log_format,
        };

        Ok(Self {
            api_url: var("COINGECKO_API_URL").unwrap_or(defaults.api_url),
            api_key: var("COINGECKO_API_KEY"),
            request_timeout,
            bind_addr,
            log_format,
        })
    }
}
