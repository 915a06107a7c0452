//! Filesystem-backed tile store.
//!
//! Tiles are stored one file per key under the configured root using the
//! layout from [`super::path`]. There is no index, no size accounting and no
//! eviction: entries live until something outside this crate removes them.
//!
//! # Atomic Writes
//!
//! Each write goes to a uniquely named temp file in the target directory and
//! is then renamed into place. Readers therefore see either no file or a
//! complete tile, and concurrent writers for one key never interleave bytes.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{trace, warn};

use super::path::{column_directory, tile_path};
use super::traits::{BoxFuture, CacheError, CacheLookup, TileStore};
use crate::coord::TileKey;

/// Suffix of in-flight temp files.
const TEMP_SUFFIX: &str = "tmp";

/// Temp file sequence shared by every store in the process, so stores on the
/// same root never hand out the same temp name.
static TEMP_SEQ: AtomicU64 = AtomicU64::new(0);

/// Tile store rooted at a directory on disk.
#[derive(Debug)]
pub struct DiskTileStore {
    /// Cache root directory.
    directory: PathBuf,
}

impl DiskTileStore {
    /// Create a store rooted at `directory`.
    ///
    /// The directory does not need to exist yet; it is created on the first
    /// write.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Cache root directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Path the tile for `key` is stored at.
    pub fn path_for(&self, key: &TileKey) -> PathBuf {
        tile_path(&self.directory, key)
    }

    fn temp_path_for(&self, key: &TileKey) -> PathBuf {
        let seq = TEMP_SEQ.fetch_add(1, Ordering::Relaxed);
        column_directory(&self.directory, key).join(format!(
            ".{}.{}.{}.{}",
            key.row(),
            std::process::id(),
            seq,
            TEMP_SUFFIX
        ))
    }

    async fn write_atomic(&self, key: &TileKey, data: Vec<u8>) -> Result<(), CacheError> {
        let dir = column_directory(&self.directory, key);
        // create_dir_all tolerates directories that already exist or that a
        // concurrent writer creates underneath us
        tokio::fs::create_dir_all(&dir).await?;

        let final_path = self.path_for(key);
        let temp_path = self.temp_path_for(key);

        if let Err(e) = tokio::fs::write(&temp_path, &data).await {
            remove_temp(&temp_path).await;
            return Err(e.into());
        }
        if let Err(e) = tokio::fs::rename(&temp_path, &final_path).await {
            remove_temp(&temp_path).await;
            return Err(e.into());
        }

        trace!(path = %final_path.display(), bytes = data.len(), "Tile written");
        Ok(())
    }
}

async fn remove_temp(path: &Path) {
    match tokio::fs::remove_file(path).await {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => warn!(path = %path.display(), error = %e, "Failed to remove temp tile"),
    }
}

impl TileStore for DiskTileStore {
    fn read<'a>(&'a self, key: &'a TileKey) -> BoxFuture<'a, CacheLookup> {
        let path = self.path_for(key);
        Box::pin(async move {
            match tokio::fs::read(&path).await {
                Ok(data) => CacheLookup::Found(data),
                Err(e) if e.kind() == ErrorKind::NotFound => CacheLookup::NotFound,
                Err(e) => CacheLookup::Fault(CacheError::Io(e)),
            }
        })
    }

    fn write<'a>(
        &'a self,
        key: &'a TileKey,
        data: Vec<u8>,
    ) -> BoxFuture<'a, Result<(), CacheError>> {
        Box::pin(self.write_atomic(key, data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::parse_tile_key;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn key(z: &str, x: &str, y: &str) -> TileKey {
        parse_tile_key(z, x, y).unwrap()
    }

    fn temp_files(dir: &Path) -> Vec<PathBuf> {
        match std::fs::read_dir(dir) {
            Ok(entries) => entries
                .filter_map(|e| e.ok())
                .map(|e| e.path())
                .filter(|p| p.extension().is_some_and(|ext| ext == TEMP_SUFFIX))
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_read_missing_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let store = DiskTileStore::new(temp_dir.path());

        let lookup = store.read(&key("1", "2", "3")).await;
        assert!(matches!(lookup, CacheLookup::NotFound));
    }

    #[tokio::test]
    async fn test_read_missing_root_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let store = DiskTileStore::new(temp_dir.path().join("does-not-exist"));

        let lookup = store.read(&key("1", "2", "3")).await;
        assert!(matches!(lookup, CacheLookup::NotFound));
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let store = DiskTileStore::new(temp_dir.path());
        let k = key("15", "17599", "10746");

        store.write(&k, vec![0x89, b'P', b'N', b'G']).await.unwrap();

        match store.read(&k).await {
            CacheLookup::Found(data) => assert_eq!(data, vec![0x89, b'P', b'N', b'G']),
            other => panic!("expected hit, got {:?}", other),
        }
        assert!(temp_dir.path().join("15/17599/10746.png").is_file());
    }

    #[tokio::test]
    async fn test_write_into_existing_directory() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir_all(temp_dir.path().join("1/2")).unwrap();
        let store = DiskTileStore::new(temp_dir.path());

        store.write(&key("1", "2", "3"), vec![1]).await.unwrap();
        store.write(&key("1", "2", "4"), vec![2]).await.unwrap();

        assert_eq!(std::fs::read(temp_dir.path().join("1/2/4.png")).unwrap(), vec![2]);
    }

    #[tokio::test]
    async fn test_write_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let store = DiskTileStore::new(temp_dir.path());
        let k = key("1", "2", "3");

        store.write(&k, vec![1, 1, 1]).await.unwrap();
        store.write(&k, vec![2, 2]).await.unwrap();

        assert_eq!(std::fs::read(store.path_for(&k)).unwrap(), vec![2, 2]);
    }

    #[tokio::test]
    async fn test_write_leaves_no_temp_files() {
        let temp_dir = TempDir::new().unwrap();
        let store = DiskTileStore::new(temp_dir.path());
        let k = key("1", "2", "3");

        store.write(&k, vec![1, 2, 3]).await.unwrap();

        assert!(temp_files(&temp_dir.path().join("1/2")).is_empty());
    }

    #[tokio::test]
    async fn test_write_fails_when_directory_blocked() {
        let temp_dir = TempDir::new().unwrap();
        // A regular file where the zoom directory should be
        std::fs::write(temp_dir.path().join("1"), b"not a directory").unwrap();
        let store = DiskTileStore::new(temp_dir.path());
        let k = key("1", "2", "3");

        let result = store.write(&k, vec![1, 2, 3]).await;

        assert!(matches!(result, Err(CacheError::Io(_))));
        assert!(!store.path_for(&k).exists());
    }

    #[tokio::test]
    async fn test_read_fault_is_not_a_miss() {
        let temp_dir = TempDir::new().unwrap();
        let store = DiskTileStore::new(temp_dir.path());
        let k = key("1", "2", "3");
        // A directory where the tile file should be
        std::fs::create_dir_all(store.path_for(&k)).unwrap();

        let lookup = store.read(&k).await;
        assert!(matches!(lookup, CacheLookup::Fault(_)));
    }

    #[tokio::test]
    async fn test_concurrent_writes_same_key() {
        let temp_dir = TempDir::new().unwrap();
        let store = Arc::new(DiskTileStore::new(temp_dir.path()));
        let k = key("7", "64", "42");
        let payload: Vec<u8> = (0..64 * 1024).map(|i| (i % 251) as u8).collect();

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let store = Arc::clone(&store);
                let k = k.clone();
                let payload = payload.clone();
                tokio::spawn(async move { store.write(&k, payload).await })
            })
            .collect();

        for result in futures::future::join_all(handles).await {
            result.unwrap().unwrap();
        }

        assert_eq!(std::fs::read(store.path_for(&k)).unwrap(), payload);
        assert!(temp_files(&temp_dir.path().join("7/64")).is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_stores_sharing_root_write_same_key() {
        let temp_dir = TempDir::new().unwrap();
        let first = Arc::new(DiskTileStore::new(temp_dir.path()));
        let second = Arc::new(DiskTileStore::new(temp_dir.path()));
        let k = key("9", "10", "11");
        let payload: Vec<u8> = (0..256 * 1024).map(|i| (i % 241) as u8).collect();

        for _ in 0..50 {
            let handles: Vec<_> = [&first, &second]
                .into_iter()
                .map(|store| {
                    let store = Arc::clone(store);
                    let k = k.clone();
                    let payload = payload.clone();
                    tokio::spawn(async move { store.write(&k, payload).await })
                })
                .collect();

            for result in futures::future::join_all(handles).await {
                result.unwrap().unwrap();
            }
        }

        assert_eq!(std::fs::read(first.path_for(&k)).unwrap(), payload);
        assert!(temp_files(&temp_dir.path().join("9/10")).is_empty());
    }

    #[test]
    fn test_temp_names_unique_across_stores() {
        let temp_dir = TempDir::new().unwrap();
        let first = DiskTileStore::new(temp_dir.path());
        let second = DiskTileStore::new(temp_dir.path());
        let k = key("1", "2", "3");

        assert_ne!(first.temp_path_for(&k), second.temp_path_for(&k));
    }
}
