//! CLI subcommand implementations.

pub mod chart;
pub mod plan;
pub mod shell;
pub mod summary;
mod util;
