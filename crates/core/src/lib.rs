//! Snapshot naming and valuation primitives for snapbtr
//!
//! This crate provides:
//! - Snapshot identifiers in the fixed `YYYYMMDD-HHMMSS` UTC format
//! - The exponential time value used to rank snapshots
//! - Human-friendly size parsing (`10G`, `512Mb`, ...)

pub mod name;
pub mod size;

// Re-exports
pub use name::{time_value, SnapshotName, DATE_FORMAT, TIME_SCALE};
pub use size::{parse_size, Size, SizeParseError};
