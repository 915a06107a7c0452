//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::path::PathBuf;
use std::process;

use tilecache::app::AppError;
use tilecache::config::ConfigError;
use tilecache::proxy::ProxyError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(ConfigError),
    /// Failed to build or run the application
    App(AppError),
    /// Failed to create the Tokio runtime
    Runtime(std::io::Error),
    /// Tile request failed
    Fetch(ProxyError),
    /// Failed to write output file
    FileWrite {
        path: PathBuf,
        error: std::io::Error,
    },
    /// Failed to scan the cache directory
    CacheStats(String),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::Config(ConfigError::MissingUserAgent)
            | CliError::App(AppError::Config(ConfigError::MissingUserAgent)) => {
                eprintln!();
                eprintln!("The upstream tile server requires a User-Agent that identifies");
                eprintln!("your application, e.g.:");
                eprintln!("  tilecache serve --user-agent \"MyMapApp/1.0 (ops@example.com)\"");
                eprintln!("or set user_agent in the [proxy] section of config.ini");
                eprintln!("(run 'tilecache init' to create one).");
            }
            CliError::App(AppError::Bind { .. }) => {
                eprintln!();
                eprintln!("Common issues:");
                eprintln!("  1. Another process is using the port: pick one with --listen");
                eprintln!("  2. Ports below 1024 need elevated privileges");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(e) => write!(f, "{}", e),
            CliError::App(e) => write!(f, "{}", e),
            CliError::Runtime(e) => write!(f, "Failed to create Tokio runtime: {}", e),
            CliError::Fetch(e) => write!(f, "Failed to fetch tile: {}", e),
            CliError::FileWrite { path, error } => {
                write!(f, "Failed to write file '{}': {}", path.display(), error)
            }
            CliError::CacheStats(msg) => write!(f, "Failed to read cache statistics: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::App(e) => Some(e),
            CliError::Runtime(e) => Some(e),
            CliError::Fetch(e) => Some(e),
            CliError::FileWrite { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e)
    }
}

impl From<AppError> for CliError {
    fn from(e: AppError) -> Self {
        CliError::App(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_write_display() {
        let err = CliError::FileWrite {
            path: PathBuf::from("/tmp/tile.png"),
            error: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to write file '/tmp/tile.png': denied"
        );
    }

    #[test]
    fn test_fetch_display_includes_status() {
        let err = CliError::Fetch(ProxyError::UpstreamUnavailable { status: 404 });
        assert!(err.to_string().contains("HTTP 404"));
    }

    #[test]
    fn test_config_error_conversion() {
        let err: CliError = ConfigError::MissingUserAgent.into();
        assert!(matches!(err, CliError::Config(ConfigError::MissingUserAgent)));
    }
}
