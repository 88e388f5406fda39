//! The 3x3 board and its occupancy queries.

use crate::moves::{CELLS, SIZE};
use crate::{BoardError, GameStatus, Mark, Move, rules};
use std::str::FromStr;
use tracing::instrument;

/// 3x3 tic-tac-toe board.
///
/// `marked` always equals the number of non-empty cells. It only ever
/// grows: exploration of hypothetical moves works on copies, never by
/// unmarking a cell in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Mark; SIZE]; SIZE],
    marked: usize,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `mark` on an empty cell and bumps the mark count.
    ///
    /// Occupied targets and `Mark::Empty` are rejected without touching
    /// the board.
    #[instrument(level = "trace", skip(self))]
    pub fn place_mark(&mut self, mv: Move, mark: Mark) -> Result<(), BoardError> {
        if mark.is_empty() {
            return Err(BoardError::EmptyMark);
        }
        if !self.is_empty(mv) {
            return Err(BoardError::SquareOccupied(mv));
        }
        self.place_unchecked(mv, mark);
        Ok(())
    }

    /// Search-only placement; callers guarantee `mv` came from `list_empty_cells`.
    pub(crate) fn place_unchecked(&mut self, mv: Move, mark: Mark) {
        self.cells[mv.row()][mv.col()] = mark;
        self.marked += 1;
    }

    /// Returns the mark at `mv`.
    pub fn cell(&self, mv: Move) -> Mark {
        self.cells[mv.row()][mv.col()]
    }

    /// True iff the cell at `mv` is unmarked.
    pub fn is_empty(&self, mv: Move) -> bool {
        self.cell(mv).is_empty()
    }

    /// All empty cells in row-major order.
    ///
    /// The order decides which of several equally scored moves the
    /// engine picks.
    pub fn list_empty_cells(&self) -> Vec<Move> {
        Move::ALL
            .iter()
            .copied()
            .filter(|mv| self.is_empty(*mv))
            .collect()
    }

    /// Number of marks placed so far.
    pub fn mark_count(&self) -> usize {
        self.marked
    }

    /// Rows of cells, top to bottom.
    pub fn cells(&self) -> &[[Mark; SIZE]; SIZE] {
        &self.cells
    }

    /// True once all nine cells are marked.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// True while no cell is marked.
    pub fn is_empty_board(&self) -> bool {
        self.marked == 0
    }

    /// Mark owning the first complete line, or `Mark::Empty` if none.
    ///
    /// `Mark::Empty` covers both an ongoing game and a draw; check
    /// [`Board::is_full`] to tell them apart.
    pub fn winner(&self) -> Mark {
        rules::winner(self)
    }

    /// Combines `winner` and `is_full` into a single status.
    pub fn status(&self) -> GameStatus {
        rules::status(self)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            for (c, mark) in row.iter().enumerate() {
                write!(f, "{}", mark.symbol())?;
                if c < SIZE - 1 {
                    write!(f, "|")?;
                }
            }
            if r < SIZE - 1 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses nine row-major symbols (`X`, `O`, `.`), ignoring `/`, `|` and
    /// line breaks. Any configuration is accepted, including ones that
    /// cannot arise in legal play.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !matches!(*c, '/' | '|' | '\n' | '\r' | '\t'))
            .collect();
        if symbols.len() != CELLS {
            return Err(BoardError::Parse(format!(
                "expected {} cells, found {}",
                CELLS,
                symbols.len()
            )));
        }

        let mut board = Board::new();
        for (mv, c) in Move::ALL.iter().zip(symbols) {
            let mark = Mark::from_symbol(c)
                .ok_or_else(|| BoardError::Parse(format!("unknown symbol '{}'", c)))?;
            if !mark.is_empty() {
                board.place_unchecked(*mv, mark);
            }
        }
        Ok(board)
    }
}
