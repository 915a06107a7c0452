//! Proxy configuration.

use std::path::{Path, PathBuf};

use super::defaults::DEFAULT_CACHE_DIR;
use super::file::ConfigError;
use crate::proxy::CacheControl;

/// Immutable settings the proxy is built from.
///
/// Constructed once at startup and passed in explicitly, so tests can run
/// several proxies side by side with distinct cache roots.
///
/// # Example
///
/// ```
/// use tilecache::config::ProxyConfig;
///
/// let config = ProxyConfig::new("MyMapApp/1.0 (ops@example.com)")
///     .unwrap()
///     .with_cache_dir("/var/cache/tiles");
///
/// assert_eq!(config.user_agent(), "MyMapApp/1.0 (ops@example.com)");
/// assert!(ProxyConfig::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    user_agent: String,
    cache_dir: PathBuf,
    cache_control: CacheControl,
}

impl ProxyConfig {
    /// Create a config with the default cache directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingUserAgent`] if `user_agent` is blank.
    pub fn new(user_agent: impl Into<String>) -> Result<Self, ConfigError> {
        let user_agent = user_agent.into().trim().to_string();
        if user_agent.is_empty() {
            return Err(ConfigError::MissingUserAgent);
        }

        Ok(Self {
            user_agent,
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
            cache_control: CacheControl::default(),
        })
    }

    /// Set the cache root directory.
    pub fn with_cache_dir(mut self, cache_dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = cache_dir.into();
        self
    }

    /// Set the `Cache-Control` lifetimes.
    pub fn with_cache_control(mut self, cache_control: CacheControl) -> Self {
        self.cache_control = cache_control;
        self
    }

    /// `User-Agent` sent upstream.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Cache root directory.
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// `Cache-Control` lifetimes.
    pub fn cache_control(&self) -> &CacheControl {
        &self.cache_control
    }
}
