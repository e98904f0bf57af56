use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://gateway.daft.ie/api/v2/ads/listings";

/// Settings for the Daft gateway client
#[derive(Debug, Clone)]
pub struct DaftConfig {
    pub api_url: String,
    /// Listings requested per search
    pub page_size: u32,
    /// Unset means requests never time out
    pub timeout: Option<Duration>,
}

impl Default for DaftConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            page_size: 50,
            timeout: None,
        }
    }
}

/// Service configuration, read from the environment at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub daft: DaftConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            daft: DaftConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, falling back to defaults for unset keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let timeout = parse_var::<u64>(&lookup, "DAFT_TIMEOUT_SECS")?.map(Duration::from_secs);

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "PORT")?.unwrap_or(defaults.port),
            daft: DaftConfig {
                api_url: lookup("DAFT_API_URL").unwrap_or(defaults.daft.api_url),
                page_size: parse_var(&lookup, "DAFT_PAGE_SIZE")?.unwrap_or(defaults.daft.page_size),
                timeout,
            },
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid bind address {}:{}", self.host, self.port))
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .with_context(|| format!("Invalid value for {}: {:?}", key, raw))
        })
        .transpose()
}
