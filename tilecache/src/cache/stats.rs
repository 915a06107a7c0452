//! Disk cache statistics for operators.
//!
//! Read-only scan of the cache tree. Only files matching the tile layout
//! (`<zoom>/<column>/<row>.png`) are counted; temp files from in-flight
//! writes and anything else an operator dropped in the directory are ignored.

use std::fs;
use std::io;
use std::path::Path;

use super::path::TILE_EXTENSION;

/// Summary of what is stored under a cache root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiskCacheStats {
    /// Number of cached tiles.
    pub tiles: u64,
    /// Total size of cached tiles in bytes.
    pub bytes: u64,
    /// Number of distinct zoom level directories.
    pub zoom_levels: u64,
}

/// Scan `cache_dir` and summarise the tiles it holds.
///
/// A missing cache directory is reported as empty.
///
/// # Errors
///
/// Returns the first I/O error hit while walking the tree.
pub fn disk_cache_stats(cache_dir: &Path) -> Result<DiskCacheStats, io::Error> {
    let mut stats = DiskCacheStats::default();

    if !cache_dir.is_dir() {
        return Ok(stats);
    }

    for zoom in fs::read_dir(cache_dir)? {
        let zoom = zoom?;
        if !zoom.file_type()?.is_dir() || !is_digits(&zoom.file_name()) {
            continue;
        }
        stats.zoom_levels += 1;

        for column in fs::read_dir(zoom.path())? {
            let column = column?;
            if !column.file_type()?.is_dir() || !is_digits(&column.file_name()) {
                continue;
            }

            for tile in fs::read_dir(column.path())? {
                let tile = tile?;
                let path = tile.path();
                let is_tile = tile.file_type()?.is_file()
                    && path.extension().is_some_and(|ext| ext == TILE_EXTENSION)
                    && path.file_stem().is_some_and(is_digits);
                if is_tile {
                    stats.tiles += 1;
                    stats.bytes += tile.metadata()?.len();
                }
            }
        }
    }

    Ok(stats)
}

fn is_digits(name: &std::ffi::OsStr) -> bool {
    name.to_str()
        .is_some_and(|s| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_directory_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let stats = disk_cache_stats(&temp_dir.path().join("nope")).unwrap();
        assert_eq!(stats, DiskCacheStats::default());
    }

    #[test]
    fn test_counts_tiles_and_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("3/4")).unwrap();
        fs::create_dir_all(root.join("5/6")).unwrap();
        fs::write(root.join("3/4/1.png"), vec![0u8; 100]).unwrap();
        fs::write(root.join("3/4/2.png"), vec![0u8; 50]).unwrap();
        fs::write(root.join("5/6/7.png"), vec![0u8; 25]).unwrap();

        let stats = disk_cache_stats(root).unwrap();

        assert_eq!(stats.tiles, 3);
        assert_eq!(stats.bytes, 175);
        assert_eq!(stats.zoom_levels, 2);
    }

    #[test]
    fn test_ignores_temp_and_foreign_files() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("3/4")).unwrap();
        fs::create_dir_all(root.join("notes")).unwrap();
        fs::write(root.join("3/4/1.png"), vec![0u8; 10]).unwrap();
        fs::write(root.join("3/4/.1.99.0.tmp"), vec![0u8; 10]).unwrap();
        fs::write(root.join("3/4/readme.png"), vec![0u8; 10]).unwrap();
        fs::write(root.join("README"), b"hello").unwrap();

        let stats = disk_cache_stats(root).unwrap();

        assert_eq!(stats.tiles, 1);
        assert_eq!(stats.bytes, 10);
        assert_eq!(stats.zoom_levels, 1);
    }
}
