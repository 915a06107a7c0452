//! Proxy error types.

use thiserror::Error;

use crate::cache::CacheError;
use crate::coord::KeyError;
use crate::provider::UpstreamError;

/// Status returned when upstream reports a status code that is not a valid
/// HTTP status.
const BAD_GATEWAY: u16 = 502;

/// Errors that end a tile request without a tile.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// Request path does not describe a tile.
    #[error("Invalid tile key: {0}")]
    InvalidKey(#[from] KeyError),

    /// Upstream answered with a non-success status.
    #[error("Tile not available upstream (HTTP {status})")]
    UpstreamUnavailable { status: u16 },

    /// Upstream could not be reached.
    #[error("Upstream unreachable: {0}")]
    UpstreamUnreachable(String),

    /// The fetched tile could not be persisted.
    #[error("Failed to store tile: {0}")]
    StorageWrite(#[source] CacheError),

    /// The request handler failed in an unexpected way.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<UpstreamError> for ProxyError {
    fn from(e: UpstreamError) -> Self {
        match e {
            UpstreamError::Unavailable { status } => ProxyError::UpstreamUnavailable { status },
            UpstreamError::Unreachable(msg) => ProxyError::UpstreamUnreachable(msg),
        }
    }
}

impl ProxyError {
    /// HTTP status code for this error.
    ///
    /// Upstream refusals are forwarded verbatim; everything that is our own
    /// fault is a 500.
    pub fn status_code(&self) -> u16 {
        match self {
            ProxyError::InvalidKey(_) => 400,
            ProxyError::UpstreamUnavailable { status } if (100..=999).contains(status) => *status,
            ProxyError::UpstreamUnavailable { .. } => BAD_GATEWAY,
            ProxyError::UpstreamUnreachable(_)
            | ProxyError::StorageWrite(_)
            | ProxyError::Internal(_) => 500,
        }
    }

    /// Short plain-text body sent with the error status.
    pub fn public_message(&self) -> &'static str {
        match self {
            ProxyError::InvalidKey(_) => "Invalid path",
            ProxyError::UpstreamUnavailable { .. } => "Tile not available",
            ProxyError::UpstreamUnreachable(_)
            | ProxyError::StorageWrite(_)
            | ProxyError::Internal(_) => "Internal Server Error",
        }
    }

    /// Whether the error points at a problem on this side of the proxy.
    pub fn is_server_fault(&self) -> bool {
        matches!(
            self,
            ProxyError::UpstreamUnreachable(_)
                | ProxyError::StorageWrite(_)
                | ProxyError::Internal(_)
        )
    }
}
