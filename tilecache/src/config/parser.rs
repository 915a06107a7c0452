//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This module contains the `parse_ini()` function and its helpers.
//! It is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::file::ConfigError;
use super::settings::ConfigFile;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigError> {
    let mut config = ConfigFile::default();

    // [proxy] section
    if let Some(section) = ini.section(Some("proxy")) {
        if let Some(v) = section.get("user_agent") {
            let v = v.trim();
            if !v.is_empty() {
                config.proxy.user_agent = Some(v.to_string());
            }
        }
        if let Some(v) = section.get("cache_dir") {
            let v = v.trim();
            if !v.is_empty() {
                config.proxy.cache_dir = expand_tilde(v);
            }
        }
        if let Some(v) = section.get("hit_max_age") {
            config.proxy.hit_max_age = parse_seconds("proxy", "hit_max_age", v)?;
        }
        if let Some(v) = section.get("fresh_max_age") {
            config.proxy.fresh_max_age = parse_seconds("proxy", "fresh_max_age", v)?;
        }
    }

    // [server] section
    if let Some(section) = ini.section(Some("server")) {
        if let Some(v) = section.get("listen") {
            config.server.listen = v.trim().parse().map_err(|_| ConfigError::InvalidValue {
                section: "server".to_string(),
                key: "listen".to_string(),
                value: v.to_string(),
                reason: "expected an address like '127.0.0.1:8080'".to_string(),
            })?;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = expand_tilde(v);
            }
        }
    }

    Ok(config)
}

fn parse_seconds(section: &str, key: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            value: value.to_string(),
            reason: "expected a whole number of seconds".to_string(),
        })
}

/// Expand a leading `~/` to the user's home directory.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
