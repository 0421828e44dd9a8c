//! Server configuration parsed from environment variables.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_HOST: &str = "0.0.0.0";

/// An environment value was present but unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {reason}")]
    InvalidPort { value: String, reason: String },

    #[error("invalid BIND_HOST {0:?}: expected an IP address")]
    InvalidHost(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Socket the HTTP listener binds to.
    pub addr: SocketAddr,
    /// Directory served under `/assets`.
    pub assets_dir: PathBuf,
}

impl SiteConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `BIND_HOST`: default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `ASSETS_DIR`: default `<crate>/public`
    ///
    /// Blank values count as unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("BIND_HOST").ok();
        let port = std::env::var("PORT").ok();
        let assets = std::env::var("ASSETS_DIR").ok();
        Self::from_values(host.as_deref(), port.as_deref(), assets.as_deref())
    }

    /// Same as `from_env`, from explicit raw values.
    pub fn from_values(host: Option<&str>, port: Option<&str>, assets: Option<&str>) -> Result<Self, ConfigError> {
        let ip = parse_host(host)?;
        let port = parse_port(port)?;
        Ok(Self { addr: SocketAddr::new(ip, port), assets_dir: assets_dir(assets) })
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match non_blank(raw) {
        None => Ok(DEFAULT_PORT),
        Some(value) => value.parse::<u16>().map_err(|e| ConfigError::InvalidPort {
            value: value.to_owned(),
            reason: e.to_string(),
        }),
    }
}

fn parse_host(raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    let value = non_blank(raw).unwrap_or(DEFAULT_BIND_HOST);
    value.parse::<IpAddr>().map_err(|_| ConfigError::InvalidHost(value.to_owned()))
}

fn assets_dir(raw: Option<&str>) -> PathBuf {
    non_blank(raw)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public"))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
