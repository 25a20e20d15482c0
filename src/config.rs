//! Server Configuration
//!
//! Read from environment variables at startup. Unset variables fall back to
//! defaults; a variable that is set but unparsable is an error.
//!
//! | Variable         | Default   |
//! |------------------|-----------|
//! | `HOST`           | `0.0.0.0` |
//! | `PORT`           | `3000`    |
//! | `CACHE_CAPACITY` | `10000`   |
//! | `CACHE_TTL_SECS` | `300`     |
//!
//! `CACHE_TTL_SECS` is capped at one year.

use anyhow::{bail, Context, Result};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

/// Longest accepted response cache TTL (one year)
pub const MAX_CACHE_TTL_SECS: u64 = 365 * 24 * 60 * 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,

    /// Max cached recommendation responses
    pub cache_capacity: u64,

    pub cache_ttl: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            cache_capacity: 10_000,
            cache_ttl: Duration::from_secs(300),
        }
    }
}

impl ServerConfig {
    /// Load from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to resolve variable names
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let ttl_secs: Option<u64> = parse_var(&lookup, "CACHE_TTL_SECS")?;
        if let Some(secs) = ttl_secs {
            if secs > MAX_CACHE_TTL_SECS {
                bail!(
                    "Invalid value for CACHE_TTL_SECS: {} exceeds maximum of {}",
                    secs,
                    MAX_CACHE_TTL_SECS
                );
            }
        }

        Ok(Self {
            host: parse_var(&lookup, "HOST")?.unwrap_or(defaults.host),
            port: parse_var(&lookup, "PORT")?.unwrap_or(defaults.port),
            cache_capacity: parse_var(&lookup, "CACHE_CAPACITY")?
                .unwrap_or(defaults.cache_capacity),
            cache_ttl: ttl_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.cache_ttl),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("Invalid value for {}: '{}'", key, raw)),
    }
}
