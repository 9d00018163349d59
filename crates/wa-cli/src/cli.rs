//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Household waste audit.
///
/// Log the waste your household throws away, see where it comes from and get
/// a reduction plan for the heaviest categories.
#[derive(Debug, Parser)]
#[command(name = "waste-audit", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the interactive menu (the default).
    Shell,

    /// Print the summary report for a saved ledger.
    Summary {
        /// Ledger file (defaults to the configured data file).
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the reduction action plan for a saved ledger.
    Plan {
        /// Ledger file (defaults to the configured data file).
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Number of heaviest categories to cover.
        #[arg(long)]
        top: Option<usize>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print text charts for a saved ledger.
    Chart {
        /// Ledger file (defaults to the configured data file).
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}
