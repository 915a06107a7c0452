//! Application error types.

use std::fmt;
use std::io;
use std::net::SocketAddr;

use crate::config::ConfigError;
use crate::provider::UpstreamError;

/// Errors that can occur during application lifecycle.
#[derive(Debug)]
pub enum AppError {
    /// Configuration error.
    Config(ConfigError),

    /// Failed to create the upstream HTTP client.
    HttpClient(UpstreamError),

    /// Failed to bind the listen address.
    Bind { addr: SocketAddr, source: io::Error },

    /// The HTTP server stopped with an error.
    Server(io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "Configuration error: {}", e),
            AppError::HttpClient(e) => write!(f, "Failed to create HTTP client: {}", e),
            AppError::Bind { addr, source } => {
                write!(f, "Failed to listen on {}: {}", addr, source)
            }
            AppError::Server(e) => write!(f, "Server error: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(e) => Some(e),
            AppError::HttpClient(e) => Some(e),
            AppError::Bind { source, .. } => Some(source),
            AppError::Server(e) => Some(e),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::Config(e)
    }
}

impl From<UpstreamError> for AppError {
    fn from(e: UpstreamError) -> Self {
        AppError::HttpClient(e)
    }
}
