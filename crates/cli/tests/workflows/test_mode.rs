//! Runs against the built-in in-memory fixture (`--test`)

use crate::snap;
use anyhow::Result;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_backup_target_on_fixture() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let result = snap!(temp_dir.path(), "--test", "-S", "-B", "3").assert_success()?;

    assert_eq!(
        result.removed_snapshots(),
        vec![
            "20101201-010000",
            "20101201-030000",
            "20101201-050000",
            "20101201-070000",
            "20101201-020000",
            "20101201-060000",
        ]
    );
    assert!(result.contains_stdout("Stopped: all targets satisfied"));
    Ok(())
}

#[test]
fn test_removal_cap_on_fixture() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let result = snap!(temp_dir.path(), "--test", "-S", "-M", "1", "-B", "0").assert_success()?;

    assert_eq!(result.removed_snapshots(), vec!["20101201-010000"]);
    assert!(result.contains_stdout("reached max number of snapshots to delete"));
    Ok(())
}

#[test]
fn test_free_space_target_on_fixture() -> Result<()> {
    let temp_dir = TempDir::new()?;

    // Fixture starts with 5 bytes free; sizes equal the hour
    let result = snap!(temp_dir.path(), "--test", "-S", "-F", "20").assert_success()?;
    assert_eq!(result.removed_snapshots().len(), 4);

    let result = snap!(temp_dir.path(), "--test", "-S", "-F", "5").assert_success()?;
    assert!(result.removed_snapshots().is_empty());
    assert!(result.contains_stdout("No snapshots removed"));
    Ok(())
}

#[test]
fn test_snapshot_then_clean() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let result = snap!(temp_dir.path(), "--test", "-B", "3").assert_success()?;

    assert!(result.contains_stdout("Created snapshot"));
    // Ten snapshots down to three
    assert_eq!(result.removed_snapshots().len(), 7);
    Ok(())
}

#[test]
fn test_verbose_logs_transitions() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let result = snap!(temp_dir.path(), "--test", "-S", "-B", "3", "--verbose").assert_success()?;

    assert!(result.contains_stderr("Satisfied target number of backups"));
    assert!(result.contains_stderr("remove(20101201-010000)"));
    Ok(())
}

#[test]
fn test_config_file_supplies_targets() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = temp_dir.path().join("snapbtr.toml");
    fs::write(
        &config,
        "[cleanup]\ntarget_backups = 3\n\n[snapshot]\nenabled = false\n",
    )?;

    let result = snap!(
        temp_dir.path(),
        "--test",
        "--config",
        config.to_str().unwrap()
    )
    .assert_success()?;

    assert!(!result.contains_stdout("Created snapshot"));
    assert_eq!(result.removed_snapshots().len(), 6);
    Ok(())
}
