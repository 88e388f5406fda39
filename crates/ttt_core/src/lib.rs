//! Tic-tac-toe board model and move selection.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid of [`Mark`]s with occupancy and terminal queries
//! - **Rules**: win and draw detection, kept apart from board storage
//! - **Engine**: picks a move at random or by exhaustive minimax
//!
//! # Example
//!
//! ```
//! use ttt_core::{Board, Mark, Move, SearchEngine};
//!
//! let mut board = Board::new();
//! board.place_mark(Move::new(1, 1)?, Mark::PlayerOne)?;
//!
//! let engine = SearchEngine::default();
//! let reply = engine.select_move(&board)?;
//! assert!(board.is_empty(reply));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod engine;
mod error;
mod moves;
pub mod rules;
mod types;

pub use board::Board;
pub use engine::{
    Evaluation, PLAYER_ONE_WIN, PLAYER_TWO_WIN, SEARCH_BOUND, Score, SearchEngine, Strategy, TIE,
};
pub use error::{BoardError, SearchError};
pub use moves::{CELLS, Move, SIZE};
pub use types::{GameStatus, Mark};
