//! OpenStreetMap standard tile layer provider.
//!
//! # URL Pattern
//!
//! `https://tile.openstreetmap.org/{z}/{x}/{y}.png`
//!
//! - `z` - Zoom level
//! - `x` - Column, west to east
//! - `y` - Row, north to south
//!
//! The OSM tile usage policy requires a `User-Agent` that identifies the
//! application; the HTTP client carries it.

use tracing::debug;

use crate::cache::BoxFuture;
use crate::coord::TileKey;
use crate::provider::{AsyncHttpClient, TileFetcher, UpstreamError};

/// Base URL of the OpenStreetMap tile server.
pub const OSM_TILE_URL: &str = "https://tile.openstreetmap.org";

/// OpenStreetMap tile provider.
///
/// # Example
///
/// ```ignore
/// use tilecache::provider::{AsyncReqwestClient, OsmTileProvider};
///
/// let client = AsyncReqwestClient::new("MyMapApp/1.0 (ops@example.com)")?;
/// let provider = OsmTileProvider::new(client);
/// ```
pub struct OsmTileProvider<C: AsyncHttpClient> {
    http_client: C,
    base_url: String,
}

impl<C: AsyncHttpClient> OsmTileProvider<C> {
    /// Creates a provider pointing at [`OSM_TILE_URL`].
    pub fn new(http_client: C) -> Self {
        Self::with_base_url(http_client, OSM_TILE_URL)
    }

    /// Creates a provider pointing at a server with the same URL layout.
    ///
    /// Used by tests to stand in a local mock server for the real one.
    pub fn with_base_url(http_client: C, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http_client,
            base_url,
        }
    }

    /// Builds the tile URL for the given key.
    fn build_url(&self, key: &TileKey) -> String {
        format!(
            "{}/{}/{}/{}.png",
            self.base_url,
            key.zoom(),
            key.column(),
            key.row()
        )
    }
}

impl<C: AsyncHttpClient> TileFetcher for OsmTileProvider<C> {
    fn fetch<'a>(&'a self, key: &'a TileKey) -> BoxFuture<'a, Result<Vec<u8>, UpstreamError>> {
        Box::pin(async move {
            let url = self.build_url(key);
            debug!(tile = %key, url = %url, "Fetching tile upstream");
            self.http_client.get(&url).await
        })
    }

    fn name(&self) -> &str {
        "OpenStreetMap"
    }
}
