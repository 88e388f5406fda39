//! ttt_minimax - command-line entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use ttt_core::{Board, SearchEngine};
use ttt_minimax::{ConsoleSession, GameConfig, GameMode, analyze_position};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, level, pvp } => run_play(config, level, pvp),
        Command::Analyze {
            board,
            maximizing,
            json,
        } => run_analyze(&board, maximizing, json),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument]
fn run_play(config: Option<PathBuf>, level: Option<u8>, pvp: bool) -> Result<()> {
    let mut game_config = match config {
        Some(path) => GameConfig::from_file(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(level) = level {
        game_config = game_config.with_level(level);
    }
    if pvp {
        game_config = game_config.with_mode(GameMode::PlayerVsPlayer);
    }

    info!(?game_config, "Starting game");
    let controller = game_config.controller()?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = ConsoleSession::new(controller, stdin.lock(), stdout.lock());
    session.run()
}

/// Evaluate a single position
#[instrument]
fn run_analyze(board: &str, maximizing: bool, json: bool) -> Result<()> {
    let board: Board = board.parse().context("Failed to parse board")?;
    let report = analyze_position(&board, &SearchEngine::default(), maximizing);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}
