//! Read-through tile proxy
//!
//! Per request the proxy walks a fixed sequence of steps and stops at the
//! first one that decides the outcome:
//!
//! ```text
//! Validating ──invalid──────────────────────────────────► 400
//!     │
//! CacheLookup ──found───────────────────────────────────► 200 (hit)
//!     │ not found / read fault
//! Fetching ──upstream status────────────────────────────► status
//!     │    ──unreachable────────────────────────────────► 500
//! Persisting ──write failed─────────────────────────────► 500
//!     │
//!     └─────────────────────────────────────────────────► 200 (fresh)
//! ```
//!
//! A tile is only returned from the miss path once it has been written to the
//! store, so a successful response always means the next request is a hit.

mod error;
mod response;
mod service;

pub use error::ProxyError;
pub use response::{
    CacheControl, ServedTile, TileResponse, TileSource, CONTENT_TYPE_PNG, CONTENT_TYPE_TEXT,
    DEFAULT_FRESH_MAX_AGE_SECS, DEFAULT_HIT_MAX_AGE_SECS,
};
pub use service::TileCacheProxy;
