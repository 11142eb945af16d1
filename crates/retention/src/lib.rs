//! Snapshot retention: ranking and cleanup
//!
//! This crate provides:
//! - The planner that orders snapshots from most to least disposable
//! - The cleanup controller that removes snapshots until targets are met
//! - The storage backend seam and an in-memory backend

pub mod backend;
pub mod controller;
pub mod error;
pub mod planner;
pub mod targets;

// Re-exports
pub use backend::{MemoryBackend, StorageBackend};
pub use controller::{take_snapshot, CleanupController, CleanupReport, StopReason, TargetEvent};
pub use error::{BackendOp, CleanupError};
pub use planner::{next_victim, rank, Ranking};
pub use targets::{Targets, DEFAULT_KEEP_BACKUPS};

/// Result type for cleanup operations
pub type Result<T> = std::result::Result<T, CleanupError>;
