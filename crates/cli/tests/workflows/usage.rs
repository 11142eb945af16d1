//! Usage errors and informational flags

use crate::snap;
use anyhow::Result;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_explain_prints_policy() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let result = snap!(temp_dir.path(), "--explain").assert_success()?;

    assert!(result.contains_stdout("YYYYMMDD-HHMMSS"));
    assert!(result.contains_stdout("newest snapshot is never removed"));
    Ok(())
}

#[test]
fn test_example_config_is_loadable() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let result = snap!(temp_dir.path(), "--example-config").assert_success()?;
    assert!(result.contains_stdout("[cleanup]"));

    let config = temp_dir.path().join("example.toml");
    fs::write(&config, &result.stdout)?;
    let config = config.display().to_string();

    // Free space target is far off, so cleaning runs down to keep_backups
    let result = snap!(temp_dir.path(), "--test", "-S", "--config", config.as_str())
        .assert_success()?;
    assert_eq!(result.removed_snapshots().len(), 7);
    assert!(result.contains_stdout("reached number of backups to keep"));
    Ok(())
}

#[test]
fn test_missing_targets_is_usage_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let result = snap!(temp_dir.path(), "--test", "-S", "-M", "3").assert_failure()?;

    assert_eq!(result.exit_code, 2);
    assert!(result.contains_stderr("no cleanup target set"));
    assert!(result.contains_stderr("--target-freespace"));
    Ok(())
}

#[test]
fn test_bad_size_is_usage_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let result = snap!(temp_dir.path(), "--test", "-F", "10P").assert_failure()?;

    assert_eq!(result.exit_code, 2);
    assert!(result.contains_stderr("10P"));
    Ok(())
}

#[test]
fn test_snap_flags_conflict() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let result = snap!(temp_dir.path(), "--test", "-B", "3", "-s", "/", "-S").assert_failure()?;

    assert_eq!(result.exit_code, 2);
    Ok(())
}

#[test]
fn test_missing_config_file_fails() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let result = snap!(
        temp_dir.path(),
        "--test",
        "-B",
        "3",
        "--config",
        "does-not-exist.toml"
    )
    .assert_failure()?;

    assert!(result.contains_stderr("config file not found"));
    Ok(())
}
