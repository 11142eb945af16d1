//! Storage backend seam and an in-memory implementation

use anyhow::{bail, Context, Result};
use snapbtr_core::SnapshotName;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Where snapshots live
///
/// The backend reports every entry it holds; deciding which entries are
/// snapshots is left to the caller.
pub trait StorageBackend {
    /// All snapshot identifiers currently present
    fn list(&self) -> Result<Vec<String>>;

    /// Free bytes on the managed volume
    fn free_space(&self) -> Result<u64>;

    /// Delete one snapshot
    fn remove(&mut self, identifier: &str) -> Result<()>;

    /// Snapshot `source`, naming it after the current UTC instant
    fn create(&mut self, source: &Path) -> Result<String>;
}

/// Snapshots held in memory, each with the bytes its removal frees
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    snapshots: BTreeMap<String, u64>,
    free: u64,
    snapshot_size: u64,
}

impl MemoryBackend {
    /// Empty backend with no free space
    pub fn new() -> Self {
        Self {
            snapshot_size: 1,
            ..Self::default()
        }
    }

    /// Nine hourly snapshots on 2010-12-01, sized 0 to 8 bytes, 5 bytes free
    pub fn fixture() -> Self {
        Self::new()
            .with_snapshots((0..9u64).map(|h| (format!("20101201-{:02}0000", h), h)))
            .with_free_space(5)
    }

    /// Add snapshots with their reclaimable sizes
    pub fn with_snapshots<I, S>(mut self, snapshots: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        self.snapshots
            .extend(snapshots.into_iter().map(|(name, size)| (name.into(), size)));
        self
    }

    /// Set the free space
    pub fn with_free_space(mut self, free: u64) -> Self {
        self.free = free;
        self
    }

    /// Reclaimable size given to snapshots made by `create` (default: 1)
    pub fn with_snapshot_size(mut self, size: u64) -> Self {
        self.snapshot_size = size;
        self
    }

    /// Identifiers currently held, in lexical order
    pub fn snapshot_names(&self) -> Vec<String> {
        self.snapshots.keys().cloned().collect()
    }

    /// Whether a snapshot is present
    pub fn contains(&self, identifier: &str) -> bool {
        self.snapshots.contains_key(identifier)
    }
}

impl StorageBackend for MemoryBackend {
    fn list(&self) -> Result<Vec<String>> {
        debug!("list() = {:?}", self.snapshots.keys());
        Ok(self.snapshot_names())
    }

    fn free_space(&self) -> Result<u64> {
        debug!("free_space() = {}", self.free);
        Ok(self.free)
    }

    fn remove(&mut self, identifier: &str) -> Result<()> {
        debug!("remove({})", identifier);
        match self.snapshots.remove(identifier) {
            Some(size) => {
                self.free = self.free.saturating_add(size);
                Ok(())
            }
            None => bail!("Snapshot not found: {}", identifier),
        }
    }

    fn create(&mut self, source: &Path) -> Result<String> {
        debug!("create({})", source.display());
        let name = SnapshotName::now()
            .context("Current time has no snapshot name")?
            .into_string();
        if self.snapshots.contains_key(&name) {
            bail!("Snapshot already exists: {}", name);
        }
        // Free space is left as is; the size is only reclaimed on remove
        self.snapshots.insert(name.clone(), self.snapshot_size);
        Ok(name)
    }
}
