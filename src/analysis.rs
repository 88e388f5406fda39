//! One-shot evaluation of a given position.

use serde::Serialize;
use tracing::instrument;
use ttt_core::{Board, GameStatus, Move, Score, SearchEngine};

/// Minimax verdict for a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    /// Board in row-major symbols, e.g. `XO.......`.
    pub board: String,
    /// Status before any further move.
    pub status: GameStatus,
    /// Whether the search started on the maximizing (`PlayerOne`) side.
    pub maximizing: bool,
    /// Minimax score; `None` for a decided board.
    pub score: Option<Score>,
    /// Move the search prefers; `None` for a decided board.
    pub best_move: Option<Move>,
    /// Empty cells in scan order.
    pub empty_cells: Vec<Move>,
}

/// Runs the search on `board` and collects the result.
#[instrument(skip(board, engine), fields(marks = board.mark_count()))]
pub fn analyze_position(board: &Board, engine: &SearchEngine, maximizing: bool) -> AnalysisReport {
    let evaluation = engine.analyze(board, maximizing).ok();
    AnalysisReport {
        board: Move::ALL
            .iter()
            .map(|mv| board.cell(*mv).symbol())
            .collect(),
        status: board.status(),
        maximizing,
        score: evaluation.map(|e| e.score()),
        best_move: evaluation.and_then(|e| e.best_move()),
        empty_cells: board.list_empty_cells(),
    }
}

impl std::fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Board:  {}", self.board)?;
        writeln!(f, "Status: {}", self.status)?;
        match (self.score, self.best_move) {
            (Some(score), Some(mv)) => {
                writeln!(f, "Score:  {}", score)?;
                write!(f, "Best:   {} {}", mv, mv.label())
            }
            _ => write!(f, "No move to search: the game is over"),
        }
    }
}
