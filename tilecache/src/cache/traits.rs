//! Core traits for tile storage.
//!
//! The `TileStore` trait is the capability the proxy needs from storage: look
//! up a tile by key, and persist a tile by key. Nothing else. The disk
//! implementation lives in [`super::disk`]; tests substitute in-memory or
//! failing stores.
//!
//! # Design Principles
//!
//! - **Three-way reads**: a lookup is `Found`, `NotFound` or `Fault`. A miss is
//!   the normal path and is never reported as an error.
//! - **Vec<u8> values**: raw PNG bytes, no metadata.
//! - **Dyn-compatible**: uses `Pin<Box<dyn Future>>` so the proxy can hold
//!   `Arc<dyn TileStore>`.

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

use crate::coord::TileKey;

/// Errors that can occur during cache operations.
#[derive(Debug, Error)]
pub enum CacheError {
    /// I/O error during cache operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Boxed future type for dyn-compatible async methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Outcome of a cache read.
#[derive(Debug)]
pub enum CacheLookup {
    /// The tile is stored; here are its bytes.
    Found(Vec<u8>),
    /// No entry exists for the key.
    NotFound,
    /// The entry could not be read for a reason other than absence
    /// (permissions, disk error, ...).
    Fault(CacheError),
}

/// Key/blob storage for tiles.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; one store is shared by every
/// in-flight request.
///
/// # Concurrency
///
/// No locking is expected. Two writers for the same key race benignly: both
/// carry the same upstream bytes and the last one wins.
pub trait TileStore: Send + Sync {
    /// Look up the tile for `key`.
    fn read<'a>(&'a self, key: &'a TileKey) -> BoxFuture<'a, CacheLookup>;

    /// Persist `data` as the tile for `key`, creating any missing parent
    /// directories.
    ///
    /// # Errors
    ///
    /// Returns `CacheError` if the tile could not be stored. A failed write
    /// must not leave a partial entry behind.
    fn write<'a>(&'a self, key: &'a TileKey, data: Vec<u8>)
        -> BoxFuture<'a, Result<(), CacheError>>;
}
