//! Configuration for TileCache.
//!
//! Two layers:
//!
//! - [`ConfigFile`]: the user-editable INI file at `~/.tilecache/config.ini`,
//!   loaded with defaults for anything missing.
//! - [`ProxyConfig`]: the validated, immutable value the proxy is built from.
//!
//! # Example
//!
//! ```
//! use tilecache::config::ConfigFile;
//!
//! let mut file = ConfigFile::default();
//! assert!(file.proxy_config().is_err()); // no user agent yet
//!
//! file.proxy.user_agent = Some("MyMapApp/1.0 (ops@example.com)".to_string());
//! let config = file.proxy_config().unwrap();
//! assert_eq!(config.cache_dir().to_str(), Some("tile-cache"));
//! ```

mod defaults;
mod file;
mod parser;
mod proxy;
mod settings;
mod writer;

pub use defaults::{
    default_listen_addr, default_log_file, DEFAULT_CACHE_DIR, DEFAULT_LISTEN_PORT,
    DEFAULT_LOG_FILE,
};
pub use file::{config_directory, config_file_path, ConfigError};
pub use proxy::ProxyConfig;
pub use settings::{ConfigFile, LoggingSettings, ProxySettings, ServerSettings};
