use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use wa_cli::commands::shell::Shell;
use wa_cli::commands::{chart, plan, summary};
use wa_cli::{Cli, Commands, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so they never interleave with the menu on stdout
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        None | Some(Commands::Shell) => {
            let stdin = io::stdin();
            let mut shell = Shell::new(stdin.lock(), out, config);
            shell.run().context("interactive session failed")?;
        }
        Some(Commands::Summary { file, json }) => {
            let store = config.store(file.as_deref());
            summary::run(&mut out, &store, json)?;
        }
        Some(Commands::Plan { file, top, json }) => {
            let store = config.store(file.as_deref());
            plan::run(&mut out, &store, top.unwrap_or(config.plan_size), json)?;
        }
        Some(Commands::Chart { file }) => {
            let store = config.store(file.as_deref());
            chart::run(&mut out, &store)?;
        }
    }

    Ok(())
}
