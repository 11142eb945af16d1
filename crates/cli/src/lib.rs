//! snapbtr command line front end
//!
//! Argument parsing, config files and the btrfs backend live here; the
//! ranking and cleanup logic is in the `retention` crate.

pub mod args;
pub mod btrfs;
pub mod cmd;
pub mod config;
pub mod settings;
pub mod util;

pub use args::Cli;
pub use settings::Settings;
