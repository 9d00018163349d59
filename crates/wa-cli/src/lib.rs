//! Household waste audit CLI library.
//!
//! This crate provides the interactive shell and command-line interface.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands};
pub use config::Config;
