//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! This module contains the `to_config_string()` function that produces
//! the commented INI representation written to `config.ini`.

use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let user_agent = config.proxy.user_agent.as_deref().unwrap_or("");

    format!(
        r#"[proxy]
; User-Agent sent to the upstream tile server (REQUIRED).
; The OpenStreetMap tile usage policy asks for a value that identifies your
; application and a way to contact you, e.g.
;   user_agent = MyMapApp/1.0 (ops@example.com)
user_agent = {}
; Directory tiles are cached in, laid out as <zoom>/<x>/<y>.png.
; Relative paths are resolved against the working directory.
cache_dir = {}
; Cache-Control max-age (seconds) for tiles served from the local cache
hit_max_age = {}
; Cache-Control max-age (seconds) for tiles just fetched from upstream
fresh_max_age = {}

[server]
; Address the HTTP server binds to
listen = {}

[logging]
; Log file path (truncated on every start)
file = {}
"#,
        user_agent,
        path_to_string(&config.proxy.cache_dir),
        config.proxy.hit_max_age,
        config.proxy.fresh_max_age,
        config.server.listen,
        path_to_string(&config.logging.file),
    )
}

/// Convert path to string, collapsing the home directory to `~`.
fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_string_has_sections() {
        let content = to_config_string(&ConfigFile::default());

        assert!(content.contains("[proxy]"));
        assert!(content.contains("[server]"));
        assert!(content.contains("[logging]"));
        assert!(content.contains("cache_dir = tile-cache"));
        assert!(content.contains("listen = 127.0.0.1:8080"));
    }

    #[test]
    fn test_user_agent_written() {
        let mut config = ConfigFile::default();
        config.proxy.user_agent = Some("Tiles/1.0".to_string());

        let content = to_config_string(&config);
        assert!(content.contains("user_agent = Tiles/1.0\n"));
    }

    #[test]
    fn test_path_to_string_collapses_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(path_to_string(&home.join("tiles")), "~/tiles");
        }
        assert_eq!(path_to_string(&PathBuf::from("tiles")), "tiles");
    }
}
