//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Proxy settings
    pub proxy: ProxySettings,
    /// HTTP server settings
    pub server: ServerSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Proxy configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ProxySettings {
    /// `User-Agent` sent upstream. Must identify the deployment; there is
    /// no built-in default.
    pub user_agent: Option<String>,
    /// Cache root directory
    pub cache_dir: PathBuf,
    /// `Cache-Control` max-age for cache hits, in seconds
    pub hit_max_age: u64,
    /// `Cache-Control` max-age for freshly fetched tiles, in seconds
    pub fresh_max_age: u64,
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerSettings {
    /// Address to bind
    pub listen: SocketAddr,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
}
