//! Configuration file handling for ~/.tilecache/config.ini.
//!
//! Loads and saves user configuration with sensible defaults.
//! Settings structs live in [`super::settings`], constants in [`super::defaults`],
//! parsing in [`super::parser`], and serialization in [`super::writer`].

use ini::Ini;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::proxy::ProxyConfig;
use super::settings::ConfigFile;
use crate::proxy::CacheControl;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// Failed to write config file
    #[error("Failed to write config file: {0}")]
    WriteError(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    /// No upstream User-Agent configured
    #[error(
        "No User-Agent configured. Set proxy.user_agent in config.ini or pass --user-agent"
    )]
    MissingUserAgent,

    /// Failed to create config directory
    #[error("Failed to create config directory: {0}")]
    DirectoryError(std::io::Error),
}

impl ConfigFile {
    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        super::parser::parse_ini(&ini)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::DirectoryError)?;
        }

        let content = super::writer::to_config_string(self);
        std::fs::write(path, content).map_err(|e| ConfigError::WriteError(e.to_string()))
    }

    /// Create the default config file at `path` if it doesn't exist.
    ///
    /// Returns `true` if a new file was written.
    pub fn ensure_exists_at(path: &Path) -> Result<bool, ConfigError> {
        if path.exists() {
            return Ok(false);
        }
        Self::default().save_to(path)?;
        Ok(true)
    }

    /// Build the validated proxy configuration from these settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingUserAgent`] if no user agent is set.
    pub fn proxy_config(&self) -> Result<ProxyConfig, ConfigError> {
        let user_agent = self
            .proxy
            .user_agent
            .as_deref()
            .ok_or(ConfigError::MissingUserAgent)?;

        Ok(ProxyConfig::new(user_agent)?
            .with_cache_dir(self.proxy.cache_dir.clone())
            .with_cache_control(CacheControl {
                hit_max_age_secs: self.proxy.hit_max_age,
                fresh_max_age_secs: self.proxy.fresh_max_age,
            }))
    }
}

/// Get the path to the config directory (~/.tilecache).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".tilecache")
}

/// Get the path to the config file (~/.tilecache/config.ini).
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();

        assert!(config.proxy.user_agent.is_none());
        assert_eq!(config.proxy.cache_dir, PathBuf::from(DEFAULT_CACHE_DIR));
        assert_eq!(config.server.listen, default_listen_addr());
        assert!(config.logging.file.ends_with("tilecache.log"));
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = ConfigFile::load_from(&temp_dir.path().join("config.ini")).unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.ini");

        let mut config = ConfigFile::default();
        config.proxy.user_agent = Some("SaveTest/1.0 (ops@example.com)".to_string());
        config.proxy.cache_dir = temp_dir.path().join("tiles");
        config.proxy.hit_max_age = 120;
        config.server.listen = "0.0.0.0:8181".parse().unwrap();

        config.save_to(&path).unwrap();
        let loaded = ConfigFile::load_from(&path).unwrap();

        assert_eq!(loaded.proxy, config.proxy);
        assert_eq!(loaded.server, config.server);
    }

    #[test]
    fn test_ensure_exists_at() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.ini");

        assert!(ConfigFile::ensure_exists_at(&path).unwrap());
        assert!(path.exists());
        assert!(!ConfigFile::ensure_exists_at(&path).unwrap());
    }

    #[test]
    fn test_proxy_config_requires_user_agent() {
        let config = ConfigFile::default();
        assert!(matches!(
            config.proxy_config(),
            Err(ConfigError::MissingUserAgent)
        ));
    }

    #[test]
    fn test_proxy_config_from_file_settings() {
        let mut config = ConfigFile::default();
        config.proxy.user_agent = Some("Tiles/1.0".to_string());
        config.proxy.cache_dir = PathBuf::from("/srv/tiles");
        config.proxy.fresh_max_age = 60;

        let proxy = config.proxy_config().unwrap();

        assert_eq!(proxy.user_agent(), "Tiles/1.0");
        assert_eq!(proxy.cache_dir(), Path::new("/srv/tiles"));
        assert_eq!(proxy.cache_control().fresh_max_age_secs, 60);
    }

    #[test]
    fn test_config_paths() {
        assert!(config_file_path().ends_with(".tilecache/config.ini"));
    }
}
