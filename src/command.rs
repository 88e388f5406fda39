//! Player commands parsed from console input.

use std::str::FromStr;
use ttt_core::Move;

/// An instruction from the person at the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Mark a cell for the player to move.
    Place(Move),
    /// Switch between player-vs-player and player-vs-engine.
    ToggleMode,
    /// Start a fresh game.
    Reset,
    /// Change the engine difficulty (0 = random).
    SetLevel(u8),
    /// Leave the session.
    Quit,
}

/// Input that does not parse as a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CommandError {
    /// Nothing was typed.
    #[display("Empty command")]
    Empty,

    /// The words do not name a command.
    #[display("Unknown command '{}' (try 'help')", _0)]
    Unknown(String),

    /// A coordinate or level is not a number in range.
    #[display("Invalid argument '{}': {}", input, reason)]
    InvalidArgument {
        /// Offending text.
        input: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl std::error::Error for CommandError {}

/// Usage text for the console.
pub const HELP: &str = "\
Commands:
  <row> <col>   mark a cell, e.g. '1 1' for the center (rows and columns are 0-2)
  g | mode      toggle player-vs-player / player-vs-engine
  r | reset     start a new game
  level <n>     engine difficulty: 0 = random, 1 or more = minimax
  q | quit      leave";

fn parse_number<T: FromStr>(word: &str) -> Result<T, CommandError> {
    word.parse().map_err(|_| CommandError::InvalidArgument {
        input: word.to_string(),
        reason: "not a number".to_string(),
    })
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(',', " ");
        let words: Vec<&str> = normalized.split_whitespace().collect();

        match words.as_slice() {
            [] => Err(CommandError::Empty),
            ["g" | "mode"] => Ok(Command::ToggleMode),
            ["r" | "reset"] => Ok(Command::Reset),
            ["q" | "quit" | "exit"] => Ok(Command::Quit),
            ["level", n] => Ok(Command::SetLevel(parse_number(n)?)),
            [row, col] => {
                let row = parse_number(row)?;
                let col = parse_number(col)?;
                let mv = Move::new(row, col).map_err(|e| CommandError::InvalidArgument {
                    input: s.trim().to_string(),
                    reason: e.to_string(),
                })?;
                Ok(Command::Place(mv))
            }
            _ => Err(CommandError::Unknown(s.trim().to_string())),
        }
    }
}
