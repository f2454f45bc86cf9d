//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `LINKER_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::constants::{
    DEFAULT_CACHE_DIR, DEFAULT_MAX_REDIRECTS, DEFAULT_MEMORY_CAPACITY,
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SPARQL_ENDPOINT,
};

/// Resolver configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `LINKER_*` overrides on top of defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory holding one record file per mention. Default: `./wikidatacache`.
    pub cache_path: PathBuf,

    /// SPARQL endpoint queried for label matches.
    pub sparql_endpoint: String,

    /// `User-Agent` sent with every request (the public endpoint rejects anonymous clients).
    pub user_agent: String,

    /// Per-request timeout enforced by the transport. Default: 30s.
    pub request_timeout: Duration,

    /// Redirect hops followed when fetching a candidate page. Default: `10`.
    pub max_redirects: usize,

    /// Records memoized in memory in front of the disk cache. Default: `10_000`.
    pub memory_capacity: u64,

    /// Skip cache reads and always resolve afresh. Default: `false`.
    pub force_refresh: bool,
}

/// Default user agent used when `LINKER_USER_AGENT` is not set.
pub const DEFAULT_USER_AGENT: &str = concat!("entity-linker/", env!("CARGO_PKG_VERSION"));

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_path: PathBuf::from(DEFAULT_CACHE_DIR),
            sparql_endpoint: DEFAULT_SPARQL_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            memory_capacity: DEFAULT_MEMORY_CAPACITY,
            force_refresh: false,
        }
    }
}

impl Config {
    const ENV_CACHE_PATH: &'static str = "LINKER_CACHE_PATH";
    const ENV_SPARQL_ENDPOINT: &'static str = "LINKER_SPARQL_ENDPOINT";
    const ENV_USER_AGENT: &'static str = "LINKER_USER_AGENT";
    const ENV_REQUEST_TIMEOUT_SECS: &'static str = "LINKER_REQUEST_TIMEOUT_SECS";
    const ENV_MAX_REDIRECTS: &'static str = "LINKER_MAX_REDIRECTS";
    const ENV_MEMORY_CAPACITY: &'static str = "LINKER_MEMORY_CAPACITY";
    const ENV_FORCE_REFRESH: &'static str = "LINKER_FORCE_REFRESH";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let cache_path = Self::parse_path_from_env(Self::ENV_CACHE_PATH, defaults.cache_path);
        let sparql_endpoint =
            Self::parse_string_from_env(Self::ENV_SPARQL_ENDPOINT, defaults.sparql_endpoint);
        let user_agent = Self::parse_string_from_env(Self::ENV_USER_AGENT, defaults.user_agent);
        let request_timeout = Duration::from_secs(Self::parse_u64_from_env(
            Self::ENV_REQUEST_TIMEOUT_SECS,
            defaults.request_timeout.as_secs(),
        )?);
        let max_redirects =
            Self::parse_u64_from_env(Self::ENV_MAX_REDIRECTS, defaults.max_redirects as u64)?
                as usize;
        let memory_capacity =
            Self::parse_u64_from_env(Self::ENV_MEMORY_CAPACITY, defaults.memory_capacity)?;
        let force_refresh =
            Self::parse_bool_from_env(Self::ENV_FORCE_REFRESH, defaults.force_refresh)?;

        Ok(Self {
            cache_path,
            sparql_endpoint,
            user_agent,
            request_timeout,
            max_redirects,
            memory_capacity,
            force_refresh,
        })
    }

    /// Validates the endpoint and basic invariants (does not create directories).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache_path.exists() && !self.cache_path.is_dir() {
            return Err(ConfigError::NotADirectory {
                path: self.cache_path.clone(),
            });
        }

        let endpoint =
            Url::parse(&self.sparql_endpoint).map_err(|e| ConfigError::InvalidEndpoint {
                value: self.sparql_endpoint.clone(),
                reason: e.to_string(),
            })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidEndpoint {
                value: self.sparql_endpoint.clone(),
                reason: format!("unsupported scheme '{}'", endpoint.scheme()),
            });
        }

        if self.request_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(())
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or(default)
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(default)
    }

    fn parse_u64_from_env(name: &'static str, default: u64) -> Result<u64, ConfigError> {
        match env::var(name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|e| ConfigError::NumberParseError {
                    name,
                    value,
                    source: e,
                }),
            Err(_) => Ok(default),
        }
    }

    fn parse_bool_from_env(name: &'static str, default: bool) -> Result<bool, ConfigError> {
        match env::var(name) {
            Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" | "" => Ok(false),
                _ => Err(ConfigError::InvalidBool { name, value }),
            },
            Err(_) => Ok(default),
        }
    }
}
