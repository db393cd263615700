//! CLI subcommand implementations.

pub mod add;
pub mod list;
pub mod preview;
pub mod remove;
pub mod summary;
