//! Server configuration.
//!
//! Defaults suit local development; each field can be overridden from the
//! environment. Empty variables count as unset.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::routing::{CacheConfig, DEFAULT_BASE_URL, DirectionsConfig};

pub const BIND_ADDR_VAR: &str = "DIRECTIONS_BIND_ADDR";
pub const STATIC_DIR_VAR: &str = "DIRECTIONS_STATIC_DIR";
pub const ACCESS_TOKEN_VAR: &str = "MAPBOX_ACCESS_TOKEN";
pub const BASE_URL_VAR: &str = "DIRECTIONS_BASE_URL";
pub const MOCK_DIR_VAR: &str = "DIRECTIONS_MOCK_DIR";
pub const CACHE_TTL_VAR: &str = "DIRECTIONS_CACHE_TTL_SECS";
pub const CACHE_CAPACITY_VAR: &str = "DIRECTIONS_CACHE_CAPACITY";

/// Error for an environment variable that is set but unparseable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value for {name}: {value:?}")]
pub struct ConfigError {
    pub name: &'static str,
    pub value: String,
}

/// Settings for the HTTP server and its route provider.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub static_dir: String,
    pub access_token: Option<String>,
    pub base_url: String,
    /// Serve recorded responses from this directory instead of the live API.
    pub mock_dir: Option<PathBuf>,
    pub cache: CacheConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            static_dir: "static".to_string(),
            access_token: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            mock_dir: None,
            cache: CacheConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through `lookup`, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(addr) = parse_var(&get, BIND_ADDR_VAR)? {
            config.bind_addr = addr;
        }
        if let Some(dir) = get(STATIC_DIR_VAR) {
            config.static_dir = dir;
        }
        config.access_token = get(ACCESS_TOKEN_VAR);
        if let Some(url) = get(BASE_URL_VAR) {
            config.base_url = url;
        }
        config.mock_dir = get(MOCK_DIR_VAR).map(PathBuf::from);
        if let Some(secs) = parse_var::<u64>(&get, CACHE_TTL_VAR)? {
            config.cache.ttl = Duration::from_secs(secs);
        }
        if let Some(capacity) = parse_var(&get, CACHE_CAPACITY_VAR)? {
            config.cache.max_capacity = capacity;
        }

        Ok(config)
    }

    /// Client configuration for the live directions API.
    pub fn directions_config(&self) -> DirectionsConfig {
        DirectionsConfig::new(self.access_token.clone().unwrap_or_default())
            .with_base_url(&self.base_url)
    }
}

fn parse_var<T: FromStr>(
    get: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, ConfigError> {
    get(name)
        .map(|value| {
            value
                .trim()
                .parse()
                .map_err(|_| ConfigError { name, value })
        })
        .transpose()
}
