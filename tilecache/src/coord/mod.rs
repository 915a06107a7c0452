//! Tile key derivation and validation
//!
//! Request paths arrive as three raw segments `{z}/{x}/{y}` where the row
//! segment may carry a `.png` suffix. This module turns those segments into a
//! [`TileKey`] or rejects them before any cache or network I/O happens.
//!
//! Only pure decimal digits are accepted. That rule alone keeps every key
//! inside the cache root: separators, dots and `..` never reach the
//! filesystem layer.
//!
//! ```
//! use tilecache::coord::parse_tile_key;
//!
//! let key = parse_tile_key("12", "2154", "1363.png").unwrap();
//! assert_eq!(key.to_string(), "12/2154/1363");
//!
//! assert!(parse_tile_key("1", "..", "3").is_err());
//! ```

mod types;

pub use types::{parse_tile_key, KeyError, Segment, TileKey};
