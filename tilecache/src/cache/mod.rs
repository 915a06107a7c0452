//! Tile storage
//!
//! A key/blob store addressed by [`TileKey`](crate::coord::TileKey). The proxy
//! only sees the [`TileStore`] trait; [`DiskTileStore`] is the production
//! implementation, writing one PNG file per tile under the cache root.
//!
//! Entries are never expired or evicted here. Pruning the tree is left to
//! external housekeeping.

mod disk;
mod path;
mod stats;
mod traits;

pub use disk::DiskTileStore;
pub use path::{column_directory, tile_path, TILE_EXTENSION};
pub use stats::{disk_cache_stats, DiskCacheStats};
pub use traits::{BoxFuture, CacheError, CacheLookup, TileStore};
