//! Explicit dataset cache keyed by source identity.
//!
//! A cached dataset is reused only while the file on disk still has the
//! same canonical path, modification time and length. Callers can drop
//! entries with [`DatasetCache::invalidate`] or [`DatasetCache::clear`].

use super::loader::{load_dataset, Dataset};
use crate::utils::error::DatasetError;
use log::{debug, warn};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

/// Identity of a dataset file at a point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceKey {
    pub path: PathBuf,
    pub modified: Option<SystemTime>,
    pub len: u64,
}

impl SourceKey {
    /// Stat `path` and build its current key
    pub fn for_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref().canonicalize()?;
        let metadata = std::fs::metadata(&path)?;

        Ok(Self {
            path,
            // Some filesystems do not report mtime; length still guards those
            modified: metadata.modified().ok(),
            len: metadata.len(),
        })
    }
}

struct CacheEntry {
    key: SourceKey,
    dataset: Arc<Dataset>,
}

/// Cache of loaded datasets
#[derive(Default)]
pub struct DatasetCache {
    entries: HashMap<PathBuf, CacheEntry>,
    hits: u64,
    misses: u64,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached dataset for `path`, loading it if absent or stale
    pub fn get_or_load(&mut self, path: impl AsRef<Path>) -> Result<Arc<Dataset>, DatasetError> {
        self.get_or_load_with(path, |p| load_dataset(p))
    }

    /// Same as `get_or_load`, with the loader supplied by the caller
    ///
    /// The file is stat'ed again after loading. If it changed while being
    /// read, the dataset is returned but not cached, since it may not
    /// match either key.
    pub(crate) fn get_or_load_with<F>(
        &mut self,
        path: impl AsRef<Path>,
        load: F,
    ) -> Result<Arc<Dataset>, DatasetError>
    where
        F: FnOnce(&Path) -> Result<Dataset, DatasetError>,
    {
        let key = SourceKey::for_path(&path)?;

        if let Some(entry) = self.entries.get(&key.path) {
            if entry.key == key {
                self.hits += 1;
                debug!("Dataset cache hit: {}", key.path.display());
                return Ok(Arc::clone(&entry.dataset));
            }
            debug!("Dataset changed on disk, reloading: {}", key.path.display());
        }

        self.misses += 1;
        let dataset = Arc::new(load(&key.path)?);

        let key_after = SourceKey::for_path(&key.path)?;
        if key_after != key {
            warn!(
                "Dataset changed while loading, not caching: {}",
                key.path.display()
            );
            self.entries.remove(&key.path);
            return Ok(dataset);
        }

        self.entries.insert(
            key.path.clone(),
            CacheEntry {
                key,
                dataset: Arc::clone(&dataset),
            },
        );

        Ok(dataset)
    }

    /// Drop the entry for `path`. Returns true if one was cached.
    pub fn invalidate(&mut self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        let removed = self.entries.remove(&canonical).is_some();
        if removed {
            debug!("Invalidated cached dataset: {}", canonical.display());
        }
        removed
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (hits, misses) since creation
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const CSV: &str = "category,fraud,amount,gender\n3,1,10.0,2\n";

    #[test]
    fn test_file_rewritten_during_load_is_not_cached() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        fs::write(&path, CSV).unwrap();

        let mut cache = DatasetCache::new();
        let first = cache
            .get_or_load_with(&path, |p| {
                let dataset = load_dataset(p)?;
                fs::write(p, format!("{}4,0,20.0,3\n", CSV))?;
                Ok(dataset)
            })
            .unwrap();

        assert_eq!(first.len(), 1);
        assert!(cache.is_empty());

        // Next call sees the rewritten file, not the stale dataset
        let second = cache.get_or_load(&path).unwrap();
        assert_eq!(second.len(), 2);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_stable_file_is_cached() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        fs::write(&path, CSV).unwrap();

        let mut cache = DatasetCache::new();
        let first = cache.get_or_load_with(&path, |p| load_dataset(p)).unwrap();
        let second = cache.get_or_load(&path).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.stats(), (1, 1));
    }
}
