//! Effective run settings: flags over config file over defaults

use crate::args::Cli;
use crate::config::FileConfig;
use retention::{CleanupError, Targets, DEFAULT_KEEP_BACKUPS};
use snapbtr_core::Size;
use std::path::PathBuf;

/// Default subvolume to snapshot before cleaning
pub const DEFAULT_SNAPSHOT_SOURCE: &str = "/";

/// Everything a run needs, resolved and validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory holding the snapshots
    pub path: PathBuf,
    pub targets: Targets,
    /// Free space target as given, for display
    pub target_freespace: Option<Size>,
    /// Subvolume to snapshot first, if any
    pub snapshot_source: Option<PathBuf>,
    pub test_mode: bool,
}

impl Settings {
    /// Merge flags with the config file. Fails if no target is set.
    pub fn resolve(cli: &Cli, file: FileConfig) -> Result<Self, CleanupError> {
        let cleanup = file.cleanup;
        let target_freespace = cli.target_freespace.clone().or(cleanup.target_freespace);

        let targets = Targets {
            keep_backups: Some(
                cli.keep_backups
                    .or(cleanup.keep_backups)
                    .unwrap_or(DEFAULT_KEEP_BACKUPS),
            ),
            target_freespace: target_freespace.as_ref().map(Size::bytes),
            target_backups: cli.target_backups.or(cleanup.target_backups),
            target_removed: cli.max_removed.or(cleanup.max_removed),
        };
        targets.validate()?;

        let disabled_in_file = file.snapshot.enabled == Some(false) && cli.snap.is_none();
        let snapshot_source = if cli.no_snap || disabled_in_file {
            None
        } else {
            Some(
                cli.snap
                    .clone()
                    .or(file.snapshot.source)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_SNAPSHOT_SOURCE)),
            )
        };

        Ok(Self {
            path: cli
                .path
                .clone()
                .or(file.snapshot.path)
                .unwrap_or_else(|| PathBuf::from(".")),
            targets,
            target_freespace,
            snapshot_source,
            test_mode: cli.test,
        })
    }
}
