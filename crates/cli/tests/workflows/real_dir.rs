//! Runs against real directories that stop before any `btrfs` call
//! succeeds

use crate::common::SnapshotDir;
use crate::snap;
use anyhow::Result;

#[test]
fn test_empty_directory_fails() -> Result<()> {
    let dir = SnapshotDir::new()?;
    let path = dir.path_str();
    let result = snap!(dir.path(), "-p", path.as_str(), "-S", "-B", "1").assert_failure()?;

    assert!(result.contains_stderr("no more snapshots to clean"));
    Ok(())
}

#[test]
fn test_directory_without_snapshots_fails() -> Result<()> {
    let dir = SnapshotDir::with_entries(&["lost+found", "notes"])?;
    let path = dir.path_str();
    let result = snap!(dir.path(), "-p", path.as_str(), "-S", "-B", "1").assert_failure()?;

    assert!(result.contains_stderr("no more snapshots to clean"));
    assert_eq!(dir.entries()?, vec!["lost+found", "notes"]);
    Ok(())
}

#[test]
fn test_floor_stops_before_removal() -> Result<()> {
    let dir = SnapshotDir::hourly(2)?;
    let path = dir.path_str();
    let result = snap!(dir.path(), "-p", path.as_str(), "-S", "-B", "1").assert_success()?;

    assert!(result.contains_stdout("reached number of backups to keep"));
    assert_eq!(dir.entries()?.len(), 2);
    Ok(())
}

#[test]
fn test_satisfied_free_space_removes_nothing() -> Result<()> {
    let dir = SnapshotDir::hourly(3)?;
    let path = dir.path_str();
    let result = snap!(dir.path(), "-p", path.as_str(), "-S", "-K", "0", "-F", "0").assert_success()?;

    assert!(result.contains_stdout("No snapshots removed"));
    assert!(result.contains_stdout("all targets satisfied"));
    assert_eq!(dir.entries()?.len(), 3);
    Ok(())
}

#[test]
fn test_zero_removal_cap_removes_nothing() -> Result<()> {
    let dir = SnapshotDir::hourly(5)?;
    let path = dir.path_str();
    let result = snap!(dir.path(), "-p", path.as_str(), "-S", "-M", "0", "-B", "1").assert_success()?;

    assert!(result.contains_stdout("reached max number of snapshots to delete"));
    assert_eq!(dir.entries()?.len(), 5);
    Ok(())
}

#[test]
fn test_failed_removal_is_reported() -> Result<()> {
    // Plain directories are not subvolumes, so the delete cannot succeed
    let dir = SnapshotDir::hourly(3)?;
    let path = dir.path_str();
    let result = snap!(dir.path(), "-p", path.as_str(), "-S", "-K", "0", "-B", "1").assert_failure()?;

    assert!(result.contains_stderr("failed to remove snapshot 20101201-010000"));
    assert_eq!(
        dir.entries()?,
        vec!["20101201-000000", "20101201-010000", "20101201-020000"]
    );
    Ok(())
}

#[test]
fn test_missing_path_fails() -> Result<()> {
    let dir = SnapshotDir::new()?;
    let missing = dir.path().join("missing").display().to_string();
    let result = snap!(dir.path(), "-p", missing.as_str(), "-S", "-B", "1").assert_failure()?;

    assert!(result.contains_stderr("not a directory"));
    Ok(())
}
