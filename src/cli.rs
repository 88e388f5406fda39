//! Command-line interface for ttt_minimax.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe against a random or exhaustive minimax opponent
#[derive(Parser, Debug)]
#[command(name = "ttt_minimax")]
#[command(about = "Play tic-tac-toe against a minimax engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on the terminal
    Play {
        /// Path to a TOML game config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Engine level (0 = random, 1+ = minimax); overrides the config
        #[arg(short, long)]
        level: Option<u8>,

        /// Start in player-vs-player mode
        #[arg(long)]
        pvp: bool,
    },

    /// Evaluate a position and print the engine's preferred move
    Analyze {
        /// Nine row-major symbols, e.g. "XO./.X./..." ('.' for empty)
        #[arg(short, long)]
        board: String,

        /// Start the search on PlayerOne's (maximizing) side
        #[arg(long)]
        maximizing: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}
