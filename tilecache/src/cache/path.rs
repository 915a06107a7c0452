//! Cache path construction.
//!
//! The on-disk layout is part of the public contract because operators and
//! external housekeeping tools read and prune it directly:
//!
//! ```text
//! <cache_dir>/<zoom>/<column>/<row>.png
//! ```

use std::path::{Path, PathBuf};

use crate::coord::TileKey;

/// File extension used for every cached tile.
pub const TILE_EXTENSION: &str = "png";

/// Construct the full path for a cached tile.
///
/// # Example
///
/// ```
/// use std::path::PathBuf;
/// use tilecache::cache::tile_path;
/// use tilecache::coord::parse_tile_key;
///
/// let key = parse_tile_key("15", "17599", "10746.png").unwrap();
/// let path = tile_path(&PathBuf::from("/cache"), &key);
///
/// assert_eq!(path, PathBuf::from("/cache/15/17599/10746.png"));
/// ```
pub fn tile_path(cache_dir: &Path, key: &TileKey) -> PathBuf {
    column_directory(cache_dir, key).join(format!("{}.{}", key.row(), TILE_EXTENSION))
}

/// Get the directory holding every row of the key's column.
///
/// # Example
///
/// ```
/// use std::path::PathBuf;
/// use tilecache::cache::column_directory;
/// use tilecache::coord::parse_tile_key;
///
/// let key = parse_tile_key("15", "17599", "10746").unwrap();
/// let dir = column_directory(&PathBuf::from("/cache"), &key);
///
/// assert_eq!(dir, PathBuf::from("/cache/15/17599"));
/// ```
pub fn column_directory(cache_dir: &Path, key: &TileKey) -> PathBuf {
    cache_dir.join(key.zoom()).join(key.column())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::parse_tile_key;

    #[test]
    fn test_tile_path_relative_root() {
        let key = parse_tile_key("0", "0", "0").unwrap();
        let path = tile_path(Path::new("tile-cache"), &key);
        assert_eq!(path, PathBuf::from("tile-cache/0/0/0.png"));
    }

    #[test]
    fn test_tile_path_is_inside_root() {
        let root = PathBuf::from("/var/cache/tiles");
        let key = parse_tile_key("18", "131072", "87163.PNG").unwrap();
        let path = tile_path(&root, &key);

        assert!(path.starts_with(&root));
        assert_eq!(path.parent().unwrap(), column_directory(&root, &key));
    }

    #[test]
    fn test_distinct_keys_distinct_paths() {
        let root = Path::new("/cache");
        let a = parse_tile_key("1", "23", "4").unwrap();
        let b = parse_tile_key("12", "3", "4").unwrap();
        assert_ne!(tile_path(root, &a), tile_path(root, &b));
    }
}
