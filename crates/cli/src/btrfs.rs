//! Snapshots as btrfs subvolumes in a directory

use anyhow::{Context, Result};
use retention::StorageBackend;
use snapbtr_core::SnapshotName;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Backend driving the `btrfs` tool
#[derive(Debug, Clone)]
pub struct BtrfsBackend {
    path: PathBuf,
}

impl BtrfsBackend {
    /// Manage snapshots in `path`, which must be a directory
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_dir() {
            anyhow::bail!("Snapshot path is not a directory: {}", path.display());
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }
}

impl StorageBackend for BtrfsBackend {
    fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let entries = std::fs::read_dir(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        for entry in entries {
            let entry = entry?;
            // Non-UTF-8 names can never be snapshot names
            if let Ok(name) = entry.file_name().into_string() {
                names.push(name);
            }
        }
        Ok(names)
    }

    fn free_space(&self) -> Result<u64> {
        let stat = nix::sys::statvfs::statvfs(self.path.as_path())
            .with_context(|| format!("Failed to statvfs {}", self.path.display()))?;
        Ok(stat.blocks_free() as u64 * stat.fragment_size() as u64)
    }

    fn remove(&mut self, identifier: &str) -> Result<()> {
        let target = self.path.join(identifier);
        check_call(&[
            OsStr::new("btrfs"),
            OsStr::new("subvolume"),
            OsStr::new("delete"),
            target.as_os_str(),
        ])
    }

    fn create(&mut self, source: &Path) -> Result<String> {
        let name = SnapshotName::now()
            .context("Current time has no snapshot name")?
            .into_string();
        let target = self.path.join(&name);
        check_call(&[
            OsStr::new("btrfs"),
            OsStr::new("subvolume"),
            OsStr::new("snapshot"),
            source.as_os_str(),
            target.as_os_str(),
        ])?;
        Ok(name)
    }
}

/// Run a command, failing on a non-zero exit
fn check_call(args: &[&OsStr]) -> Result<()> {
    let cmd_str = args
        .iter()
        .map(|a| a.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ");
    debug!("{}", cmd_str);

    let (program, rest) = args
        .split_first()
        .context("Empty command line")?;
    let output = Command::new(program)
        .args(rest)
        .output()
        .with_context(|| format!("Failed to execute {}", cmd_str))?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    if !stdout.trim().is_empty() {
        debug!("{}", stdout.trim());
    }

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("failed {} ({}): {}", cmd_str, output.status, stderr.trim());
    }
    Ok(())
}
