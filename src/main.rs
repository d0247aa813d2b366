//! Strictly Grid - console game.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::io;
use strictly_grid::{Console, GameConfig, SessionEnd};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = resolve_config(cli)?;
    info!(edge_size = config.edge_size(), "Starting Strictly Grid");

    let mut console = Console::new(
        io::stdin().lock(),
        io::stdout().lock(),
        *config.clear_screen(),
    );
    match console.play(&config).context("Game session failed")? {
        SessionEnd::Finished(outcome) => info!(%outcome, "Session finished"),
        SessionEnd::Abandoned => info!("Session abandoned"),
    }

    Ok(())
}

/// Merges the config file (if any) with command-line overrides.
#[instrument(skip(cli))]
fn resolve_config(cli: Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("Loading {}", path.display()))?,
        None => GameConfig::default(),
    };

    if let Some(edge_size) = cli.edge_size {
        config = config.with_edge_size(edge_size);
    }
    if let Some(name) = cli.player_x {
        config = config.with_player_x(Some(name));
    }
    if let Some(name) = cli.player_o {
        config = config.with_player_o(Some(name));
    }
    if cli.no_clear {
        config = config.with_clear_screen(false);
    }

    config.validate()?;
    Ok(config)
}
