//! Error types for board mutation and move selection.

use crate::{Mark, Move};

/// Error raised when a board operation is given invalid input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// Row or column outside `0..=2`.
    #[display("Coordinate ({}, {}) is outside the 3x3 board", row, col)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target cell already holds a mark.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Move),

    /// `Mark::Empty` cannot be placed; boards are never unmarked.
    #[display("Cannot place an empty mark")]
    EmptyMark,

    /// Board text could not be parsed.
    #[display("Invalid board: {}", _0)]
    Parse(String),
}

impl std::error::Error for BoardError {}

/// Error raised when the engine is asked for a move it cannot make.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SearchError {
    /// The board has no empty cell left.
    #[display("No moves available: the board is full")]
    NoMovesAvailable,

    /// A line is already complete.
    #[display("Game is already over: {} has won", _0)]
    GameOver(Mark),

    /// Engines play `PlayerOne` or `PlayerTwo`, never `Empty`.
    #[display("Engine cannot play as {}", _0)]
    InvalidPlayer(Mark),
}

impl std::error::Error for SearchError {}
