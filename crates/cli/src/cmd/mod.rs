//! CLI command implementations

pub mod clean;
pub mod explain;
