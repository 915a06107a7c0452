//! CLI runner for common setup and operations.
//!
//! Encapsulates config loading, logging initialization and runtime creation
//! to reduce duplication across command handlers.

use std::path::{Path, PathBuf};

use tilecache::config::{config_file_path, ConfigFile, ProxyConfig};
use tilecache::logging::{init_logging, LoggingGuard, LoggingOptions};
use tokio::runtime::Runtime;
use tracing::info;

use crate::commands::common::ProxyOverrides;
use crate::error::CliError;

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    /// Loaded configuration file
    config: ConfigFile,
    /// Where the configuration was loaded from
    config_path: PathBuf,
}

impl CliRunner {
    /// Create a new CLI runner, loading config and initializing logging.
    pub fn new(config_path: Option<PathBuf>, logging: LoggingOptions) -> Result<Self, CliError> {
        let config_path = config_path.unwrap_or_else(config_file_path);
        let config = ConfigFile::load_from(&config_path)?;

        let logging_guard = init_logging(&config.logging.file, logging)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
            config_path,
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("TileCache v{}", tilecache::VERSION);
        info!(
            config = %self.config_path.display(),
            log_file = %self.config.logging.file.display(),
            "TileCache CLI: {} command",
            command
        );
    }

    /// Resolve the proxy configuration, CLI overrides first.
    pub fn proxy_config(&self, overrides: ProxyOverrides) -> Result<ProxyConfig, CliError> {
        Ok(overrides.apply(&self.config).proxy_config()?)
    }

    /// Create the Tokio runtime commands run on.
    pub fn runtime(&self) -> Result<Runtime, CliError> {
        Runtime::new().map_err(CliError::Runtime)
    }

    /// Write `data` to `path`.
    pub fn save_output(&self, path: &Path, data: &[u8]) -> Result<(), CliError> {
        std::fs::write(path, data).map_err(|e| CliError::FileWrite {
            path: path.to_path_buf(),
            error: e,
        })?;
        info!(path = %path.display(), bytes = data.len(), "Tile written");
        Ok(())
    }
}
