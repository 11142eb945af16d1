//! Workflow integration tests
//!
//! Each module exercises one way of invoking the binary.

pub mod real_dir;
pub mod test_mode;
pub mod usage;
