//! Cleanup loop: remove the most disposable snapshot until targets are met
//!
//! Every iteration re-lists the backend and ranks from scratch, so manual
//! deletions between iterations are picked up and no ranking state outlives
//! a single removal.

use crate::backend::StorageBackend;
use crate::error::{BackendOp, CleanupError};
use crate::planner;
use crate::targets::Targets;
use snapbtr_core::SnapshotName;
use std::fmt;
use std::path::Path;
use tracing::{debug, info, warn};

/// Why a run ended without error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// Snapshot count is at or below `keep_backups`
    FloorReached { count: usize, keep: usize },
    /// `target_removed` removals were made
    RemovalCapReached { removed: usize },
    /// No configured target asks for another removal
    TargetsSatisfied,
    /// Only the newest snapshot is left
    NothingLeftToRemove,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::FloorReached { count, keep } => {
                write!(f, "reached number of backups to keep ({} of {})", count, keep)
            }
            StopReason::RemovalCapReached { removed } => {
                write!(f, "reached max number of snapshots to delete ({})", removed)
            }
            StopReason::TargetsSatisfied => write!(f, "all targets satisfied"),
            StopReason::NothingLeftToRemove => write!(f, "nothing left to remove"),
        }
    }
}

/// A target became satisfied during the run (reported once per target)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetEvent {
    FreeSpaceSatisfied { free: u64, target: u64 },
    BackupCountSatisfied { count: usize, target: usize },
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupReport {
    /// Removed identifiers, in removal order
    pub removed: Vec<String>,
    pub stop: StopReason,
    pub events: Vec<TargetEvent>,
}

/// Drives removals against a backend
#[derive(Debug, Clone)]
pub struct CleanupController {
    targets: Targets,
}

/// Per-run state threaded through the loop
#[derive(Debug, Default)]
struct RunState {
    previous: Option<Vec<String>>,
    removals_left: Option<usize>,
    freespace_announced: bool,
    backups_announced: bool,
    removed: Vec<String>,
    events: Vec<TargetEvent>,
}

impl RunState {
    fn finish(self, stop: StopReason) -> CleanupReport {
        CleanupReport {
            removed: self.removed,
            stop,
            events: self.events,
        }
    }

    fn announce(&mut self, event: TargetEvent) {
        let announced = match event {
            TargetEvent::FreeSpaceSatisfied { .. } => &mut self.freespace_announced,
            TargetEvent::BackupCountSatisfied { .. } => &mut self.backups_announced,
        };
        if *announced {
            return;
        }
        *announced = true;

        match &event {
            TargetEvent::FreeSpaceSatisfied { free, target } => {
                info!("Satisfied free space target: {} with {}", free, target)
            }
            TargetEvent::BackupCountSatisfied { count, target } => {
                info!("Satisfied target number of backups: {} with {}", target, count)
            }
        }
        self.events.push(event);
    }
}

impl CleanupController {
    /// Create a controller; fails if neither target is set
    pub fn new(targets: Targets) -> Result<Self, CleanupError> {
        targets.validate()?;
        Ok(Self { targets })
    }

    /// The targets this controller works toward
    pub fn targets(&self) -> &Targets {
        &self.targets
    }

    /// Remove snapshots until a stop condition holds
    pub fn run<B>(&self, backend: &mut B) -> Result<CleanupReport, CleanupError>
    where
        B: StorageBackend + ?Sized,
    {
        let mut state = RunState {
            removals_left: self.targets.target_removed,
            ..RunState::default()
        };

        loop {
            let snapshots = list_snapshots(backend)?;
            let count = snapshots.len();
            debug!("{} snapshots listed", count);

            if count == 0 {
                return Err(CleanupError::NoSnapshots);
            }
            if state.previous.as_ref() == Some(&snapshots) {
                return Err(CleanupError::NoProgress { count });
            }

            if let Some(keep) = self.targets.keep_backups {
                if count <= keep {
                    info!("Reached number of backups to keep: {}", count);
                    return Ok(state.finish(StopReason::FloorReached { count, keep }));
                }
            }

            if let Some(left) = state.removals_left.as_mut() {
                if *left == 0 {
                    info!("Reached max number of snapshots to delete");
                    let removed = state.removed.len();
                    return Ok(state.finish(StopReason::RemovalCapReached { removed }));
                }
                *left -= 1;
            }

            if !self.needs_removal(backend, count, &mut state)? {
                return Ok(state.finish(StopReason::TargetsSatisfied));
            }

            let Some(victim) = planner::next_victim(&snapshots) else {
                warn!("No more backups left to remove");
                return Ok(state.finish(StopReason::NothingLeftToRemove));
            };

            info!("Removing snapshot {}", victim);
            backend
                .remove(&victim)
                .map_err(CleanupError::backend(BackendOp::Remove(victim.clone())))?;
            state.removed.push(victim);
            state.previous = Some(snapshots);
        }
    }

    /// True if any configured target still wants a removal
    fn needs_removal<B>(
        &self,
        backend: &B,
        count: usize,
        state: &mut RunState,
    ) -> Result<bool, CleanupError>
    where
        B: StorageBackend + ?Sized,
    {
        let mut remove = false;

        if let Some(target) = self.targets.target_freespace {
            let free = backend
                .free_space()
                .map_err(CleanupError::backend(BackendOp::FreeSpace))?;
            debug!("free space {} (target {})", free, target);
            if free >= target {
                state.announce(TargetEvent::FreeSpaceSatisfied { free, target });
            } else {
                remove = true;
            }
        }

        if let Some(target) = self.targets.target_backups {
            if count <= target {
                state.announce(TargetEvent::BackupCountSatisfied { count, target });
            } else {
                remove = true;
            }
        }

        Ok(remove)
    }
}

/// Snapshot names from the backend, malformed entries dropped, sorted
fn list_snapshots<B>(backend: &B) -> Result<Vec<String>, CleanupError>
where
    B: StorageBackend + ?Sized,
{
    let mut names: Vec<String> = backend
        .list()
        .map_err(CleanupError::backend(BackendOp::List))?
        .into_iter()
        .filter(|name| SnapshotName::parse(name).is_some())
        .collect();
    names.sort();
    names.dedup();
    Ok(names)
}

/// Snapshot `source` through the backend before cleaning
pub fn take_snapshot<B>(backend: &mut B, source: &Path) -> Result<String, CleanupError>
where
    B: StorageBackend + ?Sized,
{
    let name = backend
        .create(source)
        .map_err(CleanupError::backend(BackendOp::Create))?;
    info!("Created snapshot {} of {}", name, source.display());
    Ok(name)
}
