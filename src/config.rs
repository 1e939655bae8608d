// Server configuration from environment variables
//
// HOST / PORT: bind address (default 0.0.0.0:3000)
// CONTENT_PATH: optional JSON file replacing the built-in portfolio content
// CACHE_TTL_SECS: lifetime of cached rendered pages (default 300, at most one year)

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Upper bound for `CACHE_TTL_SECS`; moka refuses TTLs past 1000 years
pub const MAX_CACHE_TTL_SECS: u64 = 365 * 24 * 60 * 60;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {name}={value}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub content_path: Option<PathBuf>,
    pub cache_ttl: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            content_path: None,
            cache_ttl: Duration::from_secs(300),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source; unset or empty variables keep defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(host) = get("HOST") {
            config.host = parse_var("HOST", &host)?;
        }
        if let Some(port) = get("PORT") {
            config.port = parse_var("PORT", &port)?;
        }
        if let Some(path) = get("CONTENT_PATH") {
            config.content_path = Some(PathBuf::from(path));
        }
        if let Some(ttl) = get("CACHE_TTL_SECS") {
            let secs: u64 = parse_var("CACHE_TTL_SECS", &ttl)?;
            if secs > MAX_CACHE_TTL_SECS {
                return Err(ConfigError::Invalid {
                    name: "CACHE_TTL_SECS",
                    value: ttl,
                    reason: format!("must be at most {} seconds", MAX_CACHE_TTL_SECS),
                });
            }
            config.cache_ttl = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<T>(name: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        name,
        value: value.to_string(),
        reason: e.to_string(),
    })
}
