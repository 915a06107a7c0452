//! Application bootstrap implementation.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::error::AppError;
use crate::cache::DiskTileStore;
use crate::config::ProxyConfig;
use crate::provider::{AsyncReqwestClient, OsmTileProvider, TileFetcher, OSM_TILE_URL};
use crate::proxy::TileCacheProxy;
use crate::server;

/// TileCache application: one proxy built from one configuration.
///
/// Several apps can coexist in a process, each with its own cache root and
/// upstream, which is how the integration tests run.
pub struct TileCacheApp {
    config: ProxyConfig,
    proxy: Arc<TileCacheProxy>,
}

impl TileCacheApp {
    /// Build the proxy against the public OpenStreetMap tile server.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn build(config: ProxyConfig) -> Result<Self, AppError> {
        Self::build_with_upstream(config, OSM_TILE_URL)
    }

    /// Build the proxy against a different upstream base URL.
    ///
    /// The upstream must serve the same `{z}/{x}/{y}.png` layout.
    pub fn build_with_upstream(
        config: ProxyConfig,
        upstream_url: impl Into<String>,
    ) -> Result<Self, AppError> {
        let store = Arc::new(DiskTileStore::new(config.cache_dir()));
        let http_client = AsyncReqwestClient::new(config.user_agent())?;
        let fetcher: Arc<dyn TileFetcher> =
            Arc::new(OsmTileProvider::with_base_url(http_client, upstream_url));

        info!(
            cache_dir = %config.cache_dir().display(),
            upstream = fetcher.name(),
            "Tile proxy configured"
        );

        let proxy = TileCacheProxy::new(store, fetcher).with_cache_control(*config.cache_control());

        Ok(Self {
            config,
            proxy: Arc::new(proxy),
        })
    }

    /// Configuration the app was built from.
    pub fn config(&self) -> &ProxyConfig {
        &self.config
    }

    /// Shared handle to the proxy.
    pub fn proxy(&self) -> Arc<TileCacheProxy> {
        Arc::clone(&self.proxy)
    }

    /// Bind `addr` and serve tiles until `shutdown` is cancelled.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Bind`] if the address cannot be bound and
    /// [`AppError::Server`] if the server fails while running.
    pub async fn serve(&self, addr: SocketAddr, shutdown: CancellationToken) -> Result<(), AppError> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| AppError::Bind { addr, source })?;

        server::serve(listener, self.proxy(), shutdown)
            .await
            .map_err(AppError::Server)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config(temp_dir: &TempDir) -> ProxyConfig {
        ProxyConfig::new("BootstrapTest/1.0")
            .unwrap()
            .with_cache_dir(temp_dir.path())
    }

    #[test]
    fn test_build_keeps_config() {
        let temp_dir = TempDir::new().unwrap();
        let app = TileCacheApp::build(config(&temp_dir)).unwrap();

        assert_eq!(app.config().cache_dir(), temp_dir.path());
        assert_eq!(app.proxy().cache_control(), app.config().cache_control());
    }

    #[test]
    fn test_apps_are_independent() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();

        let a = TileCacheApp::build(config(&first)).unwrap();
        let b = TileCacheApp::build(config(&second)).unwrap();

        assert!(!Arc::ptr_eq(&a.proxy(), &b.proxy()));
        assert_ne!(a.config().cache_dir(), b.config().cache_dir());
    }

    #[tokio::test]
    async fn test_serve_reports_bind_failure() {
        let temp_dir = TempDir::new().unwrap();
        let app = TileCacheApp::build(config(&temp_dir)).unwrap();

        let occupied = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = occupied.local_addr().unwrap();

        let result = app.serve(addr, CancellationToken::new()).await;
        assert!(matches!(result, Err(AppError::Bind { .. })));
    }

    #[tokio::test]
    async fn test_serve_stops_on_shutdown() {
        let temp_dir = TempDir::new().unwrap();
        let app = TileCacheApp::build(config(&temp_dir)).unwrap();

        let shutdown = CancellationToken::new();
        shutdown.cancel();

        let result = app.serve("127.0.0.1:0".parse().unwrap(), shutdown).await;
        assert!(result.is_ok());
    }
}
