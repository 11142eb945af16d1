//! Optional TOML configuration file
//!
//! Looked up at `--config FILE`, else `<config dir>/snapbtr/config.toml`
//! when that exists. Command line flags override anything set here.

use serde::Deserialize;
use snapbtr_core::Size;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from loading a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// File contents; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub cleanup: CleanupSection,
    pub snapshot: SnapshotSection,
}

/// `[cleanup]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CleanupSection {
    pub keep_backups: Option<usize>,
    pub target_freespace: Option<Size>,
    pub target_backups: Option<usize>,
    pub max_removed: Option<usize>,
}

/// `[snapshot]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SnapshotSection {
    /// Directory holding the snapshots
    pub path: Option<PathBuf>,
    /// Subvolume to snapshot before cleaning
    pub source: Option<PathBuf>,
    /// Set to false to never snapshot
    pub enabled: Option<bool>,
}

/// Default config file location
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("snapbtr").join("config.toml"))
}

/// Load the explicit file, or the default one if present
pub fn load(explicit: Option<&Path>) -> Result<FileConfig, ConfigError> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::NotFound {
                    path: path.to_path_buf(),
                });
            }
            load_from(path)
        }
        None => match config_file_path() {
            Some(path) if path.exists() => load_from(&path),
            _ => Ok(FileConfig::default()),
        },
    }
}

/// Parse a config file
pub fn load_from(path: &Path) -> Result<FileConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Annotated example file
pub fn example_config() -> &'static str {
    r#"# snapbtr configuration

[cleanup]
# Never remove below this many snapshots
keep_backups = 2
# Remove snapshots until this much space is free (bytes, or K, M, G, T)
target_freespace = "10G"
# Remove snapshots until at most this many remain
target_backups = 200
# Remove at most this many snapshots per run
max_removed = 10

[snapshot]
# Directory holding the snapshots
path = "/var/backups/snapbtr"
# Subvolume to snapshot before cleaning
source = "/"
enabled = true
"#
}
