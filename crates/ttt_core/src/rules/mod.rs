//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Board storage and rule
//! evaluation are kept apart so the search engine and the board share a
//! single definition of a finished game.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full, status};
pub use win::{LINES, winner};
