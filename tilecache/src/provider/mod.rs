//! Upstream tile provider abstraction
//!
//! The proxy talks to the upstream through the [`TileFetcher`] trait. The
//! production implementation is [`OsmTileProvider`], which builds the tile URL
//! and delegates the request to an [`AsyncHttpClient`].
//!
//! ```ignore
//! use tilecache::provider::{AsyncReqwestClient, OsmTileProvider};
//!
//! let http_client = AsyncReqwestClient::new("MyMapApp/1.0 (ops@example.com)")?;
//! let provider = OsmTileProvider::new(http_client);
//! ```

mod http;
mod osm;
mod types;

pub use http::{AsyncHttpClient, AsyncReqwestClient};
pub use osm::{OsmTileProvider, OSM_TILE_URL};
pub use types::{TileFetcher, UpstreamError};

#[cfg(test)]
pub use http::tests::MockAsyncHttpClient;
