//! Application bootstrap.
//!
//! `TileCacheApp` wires a validated [`ProxyConfig`](crate::config::ProxyConfig)
//! into the running pieces:
//!
//! ```text
//! ProxyConfig ──► DiskTileStore (cache_dir)
//!             └─► AsyncReqwestClient (user_agent) ──► OsmTileProvider
//!                                  │
//!                                  ▼
//!                           TileCacheProxy ──► server::serve
//! ```
//!
//! # Example
//!
//! ```ignore
//! use tilecache::app::TileCacheApp;
//! use tilecache::config::ProxyConfig;
//!
//! let config = ProxyConfig::new("MyMapApp/1.0 (ops@example.com)")?;
//! let app = TileCacheApp::build(config)?;
//! app.serve("127.0.0.1:8080".parse()?, shutdown).await?;
//! ```

mod bootstrap;
mod error;

pub use bootstrap::TileCacheApp;
pub use error::AppError;
