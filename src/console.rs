//! Line-oriented front-end over any reader and writer.

use crate::command::HELP;
use crate::{Command, GameController, GameEvent, GameMode};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};
use ttt_core::{GameStatus, Strategy};

/// Interactive session reading commands from `input` and reporting to `output`.
#[derive(derive_new::new)]
pub struct ConsoleSession<R, W> {
    controller: GameController,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    /// The controller driving this session.
    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    /// Consumes the session, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until `quit` or end of input.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        info!("Starting console session");
        writeln!(self.output, "Tic-tac-toe\n{}\n", HELP)?;

        // The engine may hold the first move.
        let opening = self.controller.engine_turn();
        self.report(opening)?;
        self.render()?;

        let mut line = String::new();
        loop {
            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read command")?;
            if read == 0 {
                debug!("Input closed");
                break;
            }
            if line.trim().is_empty() {
                continue;
            }
            if line.trim().eq_ignore_ascii_case("help") {
                writeln!(self.output, "{}", HELP)?;
                continue;
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    writeln!(self.output, "{}", e)?;
                    continue;
                }
            };
            if command == Command::Quit {
                break;
            }

            let result = self.controller.handle(command);
            self.report(result)?;
            self.render()?;
        }

        writeln!(self.output, "Goodbye.")?;
        self.output.flush()?;
        Ok(())
    }

    fn report(
        &mut self,
        result: Result<Vec<GameEvent>, crate::ControllerError>,
    ) -> Result<()> {
        match result {
            Ok(events) => {
                for event in events {
                    self.describe(&event)?;
                }
            }
            Err(e) => {
                warn!(error = %e, "Command rejected");
                writeln!(self.output, "Error: {}", e)?;
            }
        }
        Ok(())
    }

    fn describe(&mut self, event: &GameEvent) -> Result<()> {
        match event {
            GameEvent::MoveMade { player, mv } => {
                writeln!(self.output, "{} played {} {}", player, mv.label(), mv)?
            }
            GameEvent::GameOver(status) => writeln!(
                self.output,
                "{}! Type 'r' to restart or 'q' to quit.",
                status
            )?,
            GameEvent::ModeChanged(mode) => writeln!(self.output, "Mode: {}", mode)?,
            GameEvent::LevelChanged(level) => {
                let strategy = match self.controller.engine().strategy() {
                    Strategy::Random => "random",
                    Strategy::Minimax => "minimax",
                };
                writeln!(self.output, "Engine level: {} ({})", level, strategy)?
            }
            GameEvent::Reset => writeln!(self.output, "Game restarted.")?,
        }
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        writeln!(self.output, "\n{}\n", self.controller.board())?;
        match self.controller.status() {
            GameStatus::InProgress => {
                let opponent = match self.controller.mode() {
                    GameMode::PlayerVsEngine => "vs engine",
                    GameMode::PlayerVsPlayer => "vs player",
                };
                writeln!(
                    self.output,
                    "{} to move ({})",
                    self.controller.current_player(),
                    opponent
                )?
            }
            status => writeln!(self.output, "{}", status)?,
        }
        Ok(())
    }
}
