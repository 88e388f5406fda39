//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Move};

/// The eight winning lines in the order they are checked.
///
/// Columns left to right, rows top to bottom, then the descending and the
/// ascending diagonal. When a constructed board holds more than one
/// complete line, the first one here decides the winner.
pub const LINES: [[Move; 3]; 8] = [
    // Columns
    [Move::at(0, 0), Move::at(1, 0), Move::at(2, 0)],
    [Move::at(0, 1), Move::at(1, 1), Move::at(2, 1)],
    [Move::at(0, 2), Move::at(1, 2), Move::at(2, 2)],
    // Rows
    [Move::at(0, 0), Move::at(0, 1), Move::at(0, 2)],
    [Move::at(1, 0), Move::at(1, 1), Move::at(1, 2)],
    [Move::at(2, 0), Move::at(2, 1), Move::at(2, 2)],
    // Descending diagonal
    [Move::at(0, 0), Move::at(1, 1), Move::at(2, 2)],
    // Ascending diagonal
    [Move::at(2, 0), Move::at(1, 1), Move::at(0, 2)],
];

/// Returns the mark of the first complete line, or `Mark::Empty`.
pub fn winner(board: &Board) -> Mark {
    for [a, b, c] in LINES {
        let mark = board.cell(a);
        if !mark.is_empty() && mark == board.cell(b) && mark == board.cell(c) {
            return mark;
        }
    }
    Mark::Empty
}
