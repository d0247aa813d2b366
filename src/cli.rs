//! Command-line interface for strictly_grid.

use clap::Parser;
use std::path::PathBuf;

/// Strictly Grid - tic-tac-toe on a board of any size
#[derive(Parser, Debug)]
#[command(name = "strictly_grid")]
#[command(about = "Two-player tic-tac-toe on an N x N board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of cells along one side of the board (at least 3)
    #[arg(short, long)]
    pub edge_size: Option<usize>,

    /// Name of the player using X
    #[arg(long)]
    pub player_x: Option<String>,

    /// Name of the player using O
    #[arg(long)]
    pub player_o: Option<String>,

    /// Do not clear the terminal between moves
    #[arg(long)]
    pub no_clear: bool,
}
