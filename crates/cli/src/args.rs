//! Command line arguments

use clap::Parser;
use snapbtr_core::Size;
use std::path::PathBuf;

/// snapbtr - keeps btrfs snapshots for backup
///
/// Removes snapshots until all targets are met, keeping the survivors
/// spaced further apart the older they are.
#[derive(Debug, Parser)]
#[command(name = "snapbtr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path for snapshots and cleanup (default: .)
    #[arg(short, long, value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Cleanup PATH until at least SIZE is free (bytes, or K, M, G, T)
    #[arg(short = 'F', long, value_name = "SIZE", help_heading = "Cleanup")]
    pub target_freespace: Option<Size>,

    /// Cleanup max # snapshots each run
    #[arg(short = 'M', long = "max-removed", value_name = "#", help_heading = "Cleanup")]
    pub max_removed: Option<usize>,

    /// Cleanup PATH until at most # backups remain
    #[arg(short = 'B', long, value_name = "#", help_heading = "Cleanup")]
    pub target_backups: Option<usize>,

    /// Stop cleaning when # backups remain (default: 2)
    #[arg(short = 'K', long, value_name = "#", help_heading = "Cleanup")]
    pub keep_backups: Option<usize>,

    /// Take snapshot of SUBVOL on invocation (default: /)
    #[arg(
        short = 's',
        long,
        value_name = "SUBVOL",
        conflicts_with = "no_snap",
        help_heading = "Snapshotting"
    )]
    pub snap: Option<PathBuf>,

    /// Disable snapshot taking
    #[arg(short = 'S', long, help_heading = "Snapshotting")]
    pub no_snap: bool,

    /// Read defaults from this TOML file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run against a built-in in-memory set of snapshots
    #[arg(long)]
    pub test: bool,

    /// Explain what snapbtr does (and stop)
    #[arg(long)]
    pub explain: bool,

    /// Print an annotated example config file (and stop)
    #[arg(long)]
    pub example_config: bool,

    /// Verbose output
    #[arg(long)]
    pub verbose: bool,
}
