//! Errors that abort a cleanup run

use std::fmt;
use thiserror::Error;

/// Backend operation that failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendOp {
    List,
    FreeSpace,
    Remove(String),
    Create,
}

impl fmt::Display for BackendOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendOp::List => write!(f, "list snapshots"),
            BackendOp::FreeSpace => write!(f, "query free space"),
            BackendOp::Remove(name) => write!(f, "remove snapshot {}", name),
            BackendOp::Create => write!(f, "create snapshot"),
        }
    }
}

/// Fatal conditions of a cleanup run
#[derive(Debug, Error)]
pub enum CleanupError {
    #[error("no cleanup target set: give a free space target, a backup count target, or both")]
    NoTargets,

    #[error("no more snapshots to clean")]
    NoSnapshots,

    #[error("no snapshot was removed: the same {count} snapshots were listed twice in a row")]
    NoProgress { count: usize },

    #[error("failed to {op}")]
    Backend {
        op: BackendOp,
        #[source]
        source: anyhow::Error,
    },
}

impl CleanupError {
    pub(crate) fn backend(op: BackendOp) -> impl FnOnce(anyhow::Error) -> Self {
        move |source| CleanupError::Backend { op, source }
    }
}
