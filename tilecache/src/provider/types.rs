//! Provider types and traits

use thiserror::Error;

use crate::cache::BoxFuture;
use crate::coord::TileKey;

/// Errors that can occur while fetching a tile upstream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamError {
    /// Upstream answered but declined to serve the tile.
    #[error("Upstream responded with HTTP {status}")]
    Unavailable { status: u16 },

    /// Upstream could not be reached or the response could not be read
    /// (DNS, connect, reset, truncated body).
    #[error("Upstream unreachable: {0}")]
    Unreachable(String),
}

/// Capability to retrieve a tile from the upstream server.
///
/// Exactly one network attempt is made per call. Retrying is the caller's
/// business.
pub trait TileFetcher: Send + Sync {
    /// Fetch the PNG bytes for `key`.
    fn fetch<'a>(&'a self, key: &'a TileKey) -> BoxFuture<'a, Result<Vec<u8>, UpstreamError>>;

    /// Returns the provider's name for logging and identification.
    fn name(&self) -> &str;
}
