//! Default values and constants for all configuration settings.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use super::file::config_directory;
use super::settings::*;
use crate::proxy::{DEFAULT_FRESH_MAX_AGE_SECS, DEFAULT_HIT_MAX_AGE_SECS};

/// Cache directory, relative to the working directory.
pub const DEFAULT_CACHE_DIR: &str = "tile-cache";

/// Port the HTTP server listens on.
pub const DEFAULT_LISTEN_PORT: u16 = 8080;

/// Log file name inside the log directory.
pub const DEFAULT_LOG_FILE: &str = "tilecache.log";

/// Default listen address (loopback only).
pub fn default_listen_addr() -> SocketAddr {
    SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), DEFAULT_LISTEN_PORT)
}

/// Default log file path (`~/.tilecache/logs/tilecache.log`).
pub fn default_log_file() -> PathBuf {
    config_directory().join("logs").join(DEFAULT_LOG_FILE)
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            proxy: ProxySettings {
                user_agent: None,
                cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
                hit_max_age: DEFAULT_HIT_MAX_AGE_SECS,
                fresh_max_age: DEFAULT_FRESH_MAX_AGE_SECS,
            },
            server: ServerSettings {
                listen: default_listen_addr(),
            },
            logging: LoggingSettings {
                file: default_log_file(),
            },
        }
    }
}
