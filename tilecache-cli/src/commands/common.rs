//! Common types and utilities shared across CLI commands.

use std::path::PathBuf;

use tilecache::config::ConfigFile;

/// Proxy settings given on the command line.
///
/// CLI takes precedence over config.ini.
#[derive(Debug, Clone, Default)]
pub struct ProxyOverrides {
    pub cache_dir: Option<PathBuf>,
    pub user_agent: Option<String>,
}

impl ProxyOverrides {
    /// Return a copy of `config` with these overrides applied.
    pub fn apply(self, config: &ConfigFile) -> ConfigFile {
        let mut config = config.clone();
        if let Some(cache_dir) = self.cache_dir {
            config.proxy.cache_dir = cache_dir;
        }
        if let Some(user_agent) = self.user_agent {
            config.proxy.user_agent = Some(user_agent);
        }
        config
    }
}

/// Format a byte count for display.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_take_precedence() {
        let mut config = ConfigFile::default();
        config.proxy.user_agent = Some("FromFile/1.0".to_string());

        let overrides = ProxyOverrides {
            cache_dir: Some(PathBuf::from("/srv/tiles")),
            user_agent: Some("FromCli/1.0".to_string()),
        };
        let merged = overrides.apply(&config);

        assert_eq!(merged.proxy.user_agent.as_deref(), Some("FromCli/1.0"));
        assert_eq!(merged.proxy.cache_dir, PathBuf::from("/srv/tiles"));
    }

    #[test]
    fn test_no_overrides_keeps_file_values() {
        let mut config = ConfigFile::default();
        config.proxy.user_agent = Some("FromFile/1.0".to_string());

        let merged = ProxyOverrides::default().apply(&config);
        assert_eq!(merged, config);
    }

    #[test]
    fn test_blank_cli_user_agent_still_rejected() {
        let overrides = ProxyOverrides {
            cache_dir: None,
            user_agent: Some("   ".to_string()),
        };
        assert!(overrides.apply(&ConfigFile::default()).proxy_config().is_err());
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 bytes");
        assert_eq!(format_size(2048), "2.00 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.00 MB");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024), "3.00 GB");
    }
}
