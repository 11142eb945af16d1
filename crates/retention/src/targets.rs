//! Cleanup targets

use crate::error::CleanupError;

/// Default floor on the number of snapshots kept
pub const DEFAULT_KEEP_BACKUPS: usize = 2;

/// What a cleanup run tries to achieve, and its limits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Targets {
    /// Never remove below this many snapshots (default: 2)
    pub keep_backups: Option<usize>,
    /// Remove until at least this many bytes are free
    pub target_freespace: Option<u64>,
    /// Remove until at most this many snapshots remain
    pub target_backups: Option<usize>,
    /// Remove at most this many snapshots in one run
    pub target_removed: Option<usize>,
}

impl Default for Targets {
    fn default() -> Self {
        Self {
            keep_backups: Some(DEFAULT_KEEP_BACKUPS),
            target_freespace: None,
            target_backups: None,
            target_removed: None,
        }
    }
}

impl Targets {
    /// At least one of the free space and backup count targets must be set
    pub fn validate(&self) -> Result<(), CleanupError> {
        if self.target_freespace.is_none() && self.target_backups.is_none() {
            return Err(CleanupError::NoTargets);
        }
        Ok(())
    }
}
