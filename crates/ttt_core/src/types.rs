//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// State of a single cell on the board.
///
/// Marks compare by identity only; there is deliberately no ordering
/// between them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Mark {
    /// Unmarked cell.
    #[default]
    Empty,
    /// The first player (drawn as `X`), whose wins score +1.
    PlayerOne,
    /// The second player (drawn as `O`), whose wins score -1.
    PlayerTwo,
}

impl Mark {
    /// Returns the opposing player's mark. `Empty` has no opponent and maps to itself.
    pub fn opponent(self) -> Self {
        match self {
            Mark::PlayerOne => Mark::PlayerTwo,
            Mark::PlayerTwo => Mark::PlayerOne,
            Mark::Empty => Mark::Empty,
        }
    }

    /// Returns true for `Mark::Empty`.
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }

    /// Single-character rendering used by `Display` and board parsing.
    pub fn symbol(self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::PlayerOne => 'X',
            Mark::PlayerTwo => 'O',
        }
    }

    /// Parses a symbol produced by [`Mark::symbol`] (case-insensitive).
    pub fn from_symbol(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            '.' | '-' | '_' | ' ' => Some(Mark::Empty),
            'X' => Some(Mark::PlayerOne),
            'O' => Some(Mark::PlayerTwo),
            _ => None,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::Empty => write!(f, "Empty"),
            Mark::PlayerOne => write!(f, "Player one (X)"),
            Mark::PlayerTwo => write!(f, "Player two (O)"),
        }
    }
}

/// Current status of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// No line is complete and at least one cell is empty.
    InProgress,
    /// A player completed a line.
    Won(Mark),
    /// The board is full with no complete line.
    Draw,
}

impl GameStatus {
    /// Returns true once the game is decided.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::Won(mark) => Some(*mark),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(mark) => write!(f, "{} wins", mark),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}
