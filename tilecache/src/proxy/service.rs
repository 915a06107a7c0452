//! Read-through tile proxy.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tracing::{debug, error, info, warn};

use super::error::ProxyError;
use super::response::{CacheControl, ServedTile, TileResponse, TileSource};
use crate::cache::{CacheLookup, TileStore};
use crate::coord::{parse_tile_key, TileKey};
use crate::provider::TileFetcher;

/// Serves tiles from a [`TileStore`], filling it from a [`TileFetcher`] on
/// a miss.
///
/// The proxy holds no per-request state and no locks. It is shared behind an
/// `Arc` by every request task; the store is the only shared mutable resource.
pub struct TileCacheProxy {
    store: Arc<dyn TileStore>,
    fetcher: Arc<dyn TileFetcher>,
    cache_control: CacheControl,
}

impl TileCacheProxy {
    /// Create a proxy over `store` and `fetcher` with default
    /// `Cache-Control` lifetimes.
    pub fn new(store: Arc<dyn TileStore>, fetcher: Arc<dyn TileFetcher>) -> Self {
        Self {
            store,
            fetcher,
            cache_control: CacheControl::default(),
        }
    }

    /// Override the `Cache-Control` lifetimes.
    pub fn with_cache_control(mut self, cache_control: CacheControl) -> Self {
        self.cache_control = cache_control;
        self
    }

    /// Configured `Cache-Control` lifetimes.
    pub fn cache_control(&self) -> &CacheControl {
        &self.cache_control
    }

    /// Handle one tile request from raw path segments.
    ///
    /// Always yields a response. Errors, including a panic inside the
    /// store or fetcher, are mapped to an error status with a short text
    /// body.
    pub async fn handle(&self, z: &str, x: &str, y: &str) -> TileResponse {
        let outcome = AssertUnwindSafe(self.serve(z, x, y))
            .catch_unwind()
            .await
            .unwrap_or_else(|panic| Err(ProxyError::Internal(panic_message(&*panic))));

        match outcome {
            Ok(served) => TileResponse::tile(served, &self.cache_control),
            Err(e) => {
                log_failure(z, x, y, &e);
                TileResponse::error(&e)
            }
        }
    }

    /// Run the read-through pipeline for one request.
    ///
    /// validate → cache read → (miss) fetch → write → tile
    ///
    /// # Errors
    ///
    /// - [`ProxyError::InvalidKey`] before any I/O if a segment is malformed
    /// - [`ProxyError::UpstreamUnavailable`] / [`ProxyError::UpstreamUnreachable`]
    ///   if the tile is not cached and the fetch fails
    /// - [`ProxyError::StorageWrite`] if the fetched tile cannot be persisted
    pub async fn serve(&self, z: &str, x: &str, y: &str) -> Result<ServedTile, ProxyError> {
        let key = parse_tile_key(z, x, y)?;

        if let Some(data) = self.lookup(&key).await {
            return Ok(ServedTile {
                data,
                source: TileSource::Cache,
            });
        }

        let data = self.fetcher.fetch(&key).await?;

        self.store
            .write(&key, data.clone())
            .await
            .map_err(ProxyError::StorageWrite)?;

        debug!(tile = %key, bytes = data.len(), provider = self.fetcher.name(), "Tile cached");
        Ok(ServedTile {
            data,
            source: TileSource::Upstream,
        })
    }

    /// Read the cache, treating faults as misses.
    async fn lookup(&self, key: &TileKey) -> Option<Vec<u8>> {
        match self.store.read(key).await {
            CacheLookup::Found(data) => {
                debug!(tile = %key, bytes = data.len(), "Cache hit");
                Some(data)
            }
            CacheLookup::NotFound => {
                debug!(tile = %key, "Cache miss");
                None
            }
            CacheLookup::Fault(e) => {
                warn!(tile = %key, error = %e, "Cache read failed, fetching upstream");
                None
            }
        }
    }
}

fn log_failure(z: &str, x: &str, y: &str, e: &ProxyError) {
    if e.is_server_fault() {
        error!(z, x, y, error = %e, "Tile request failed");
        return;
    }
    match e {
        ProxyError::UpstreamUnavailable { status } => {
            info!(z, x, y, status, "Upstream declined tile")
        }
        _ => debug!(z, x, y, error = %e, "Rejected tile request"),
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic in tile handler".to_string()
    }
}
