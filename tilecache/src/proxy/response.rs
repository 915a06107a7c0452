//! Response types produced by the proxy.

use super::error::ProxyError;

/// Content type of every tile body.
pub const CONTENT_TYPE_PNG: &str = "image/png";

/// Content type of every error body.
pub const CONTENT_TYPE_TEXT: &str = "text/plain; charset=utf-8";

/// Browser cache lifetime for tiles served from the local cache (7 days).
pub const DEFAULT_HIT_MAX_AGE_SECS: u64 = 7 * 24 * 60 * 60;

/// Browser cache lifetime for tiles just fetched from upstream (1 day).
pub const DEFAULT_FRESH_MAX_AGE_SECS: u64 = 24 * 60 * 60;

/// Where a served tile came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileSource {
    /// Read from the local cache.
    Cache,
    /// Fetched from upstream and written to the cache.
    Upstream,
}

/// A successfully served tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServedTile {
    /// PNG bytes.
    pub data: Vec<u8>,
    /// Where the bytes came from.
    pub source: TileSource,
}

/// `Cache-Control` lifetimes for successful responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheControl {
    /// `max-age` for cache hits.
    pub hit_max_age_secs: u64,
    /// `max-age` for freshly fetched tiles.
    pub fresh_max_age_secs: u64,
}

impl Default for CacheControl {
    fn default() -> Self {
        Self {
            hit_max_age_secs: DEFAULT_HIT_MAX_AGE_SECS,
            fresh_max_age_secs: DEFAULT_FRESH_MAX_AGE_SECS,
        }
    }
}

impl CacheControl {
    /// Header value for a tile from `source`.
    pub fn header_for(&self, source: TileSource) -> String {
        let max_age = match source {
            TileSource::Cache => self.hit_max_age_secs,
            TileSource::Upstream => self.fresh_max_age_secs,
        };
        format!("public, max-age={}, immutable", max_age)
    }
}

/// HTTP-shaped response handed to the routing layer.
///
/// Exactly one is produced per request. Error responses never carry image
/// bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileResponse {
    /// HTTP status code.
    pub status: u16,
    /// `Content-Type` header value.
    pub content_type: &'static str,
    /// `Cache-Control` header value, set on success only.
    pub cache_control: Option<String>,
    /// Response body.
    pub body: Vec<u8>,
}

impl TileResponse {
    /// 200 response carrying a tile.
    pub fn tile(served: ServedTile, cache_control: &CacheControl) -> Self {
        Self {
            status: 200,
            content_type: CONTENT_TYPE_PNG,
            cache_control: Some(cache_control.header_for(served.source)),
            body: served.data,
        }
    }

    /// Plain-text error response for `error`.
    pub fn error(error: &ProxyError) -> Self {
        Self {
            status: error.status_code(),
            content_type: CONTENT_TYPE_TEXT,
            cache_control: None,
            body: error.public_message().as_bytes().to_vec(),
        }
    }

    /// Whether this is a 2xx response.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::UpstreamError;

    #[test]
    fn test_hit_lives_longer_than_fresh() {
        let cc = CacheControl::default();
        assert_eq!(
            cc.header_for(TileSource::Cache),
            "public, max-age=604800, immutable"
        );
        assert_eq!(
            cc.header_for(TileSource::Upstream),
            "public, max-age=86400, immutable"
        );
    }

    #[test]
    fn test_tile_response() {
        let served = ServedTile {
            data: vec![1, 2, 3],
            source: TileSource::Upstream,
        };
        let response = TileResponse::tile(served, &CacheControl::default());

        assert_eq!(response.status, 200);
        assert_eq!(response.content_type, "image/png");
        assert_eq!(response.body, vec![1, 2, 3]);
        assert!(response.is_success());
    }

    #[test]
    fn test_error_response_has_no_cache_header() {
        let err: ProxyError = UpstreamError::Unavailable { status: 404 }.into();
        let response = TileResponse::error(&err);

        assert_eq!(response.status, 404);
        assert_eq!(response.content_type, CONTENT_TYPE_TEXT);
        assert!(response.cache_control.is_none());
        assert_eq!(response.body, b"Tile not available");
        assert!(!response.is_success());
    }
}
