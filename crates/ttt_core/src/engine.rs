//! Move selection: uniform-random or exhaustive minimax.
//!
//! Scores are always from `PlayerOne`'s point of view: +1 for a
//! `PlayerOne` win, -1 for a `PlayerTwo` win, 0 for a tie. The
//! maximizing side always plays `PlayerOne` and the minimizing side
//! always plays the engine's own mark. The search is therefore only
//! meaningful when called with `maximizing = false` on a board where it
//! is the engine's turn, and the engine plays `PlayerTwo`.

use crate::{Board, GameStatus, Mark, Move, SearchError};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Minimax score.
pub type Score = i32;

/// Score of a board won by `PlayerOne`.
pub const PLAYER_ONE_WIN: Score = 1;

/// Score of a board won by `PlayerTwo`.
pub const PLAYER_TWO_WIN: Score = -1;

/// Score of a full board with no winner.
pub const TIE: Score = 0;

/// Initial search bound, worse than any reachable score.
pub const SEARCH_BOUND: Score = 100;

/// Result of a minimax search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_new::new)]
pub struct Evaluation {
    score: Score,
    best_move: Option<Move>,
}

impl Evaluation {
    fn terminal(score: Score) -> Self {
        Self::new(score, None)
    }

    /// Score in `{-1, 0, +1}`.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Chosen move, absent on a terminal board.
    pub fn best_move(&self) -> Option<Move> {
        self.best_move
    }
}

/// How the engine picks its move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Uniform choice among empty cells.
    Random,
    /// Full game-tree search.
    Minimax,
}

/// Automated player.
///
/// `level` 0 plays at random; any higher level runs the full search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchEngine {
    level: u8,
    player: Mark,
}

impl SearchEngine {
    /// Creates an engine playing `player` at the given difficulty.
    #[instrument]
    pub fn new(level: u8, player: Mark) -> Result<Self, SearchError> {
        if player.is_empty() {
            return Err(SearchError::InvalidPlayer(player));
        }
        Ok(Self { level, player })
    }

    /// Difficulty level.
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Changes the difficulty level.
    #[instrument(skip(self), fields(from = self.level))]
    pub fn set_level(&mut self, level: u8) {
        debug!(level, "Engine level changed");
        self.level = level;
    }

    /// Mark this engine plays.
    pub fn player(&self) -> Mark {
        self.player
    }

    /// Strategy implied by the level.
    pub fn strategy(&self) -> Strategy {
        if self.level == 0 {
            Strategy::Random
        } else {
            Strategy::Minimax
        }
    }

    /// Picks a uniformly random empty cell using the thread RNG.
    pub fn choose_random(&self, board: &Board) -> Result<Move, SearchError> {
        self.choose_random_with(board, &mut rand::thread_rng())
    }

    /// Picks a uniformly random empty cell using `rng`.
    pub fn choose_random_with<R: Rng + ?Sized>(
        &self,
        board: &Board,
        rng: &mut R,
    ) -> Result<Move, SearchError> {
        board
            .list_empty_cells()
            .choose(rng)
            .copied()
            .ok_or(SearchError::NoMovesAvailable)
    }

    /// Exhaustive minimax over independent board copies.
    ///
    /// Ties keep the first move found in row-major order.
    pub fn minimax(&self, board: &Board, maximizing: bool) -> Evaluation {
        match board.winner() {
            Mark::PlayerOne => return Evaluation::terminal(PLAYER_ONE_WIN),
            Mark::PlayerTwo => return Evaluation::terminal(PLAYER_TWO_WIN),
            Mark::Empty if board.is_full() => return Evaluation::terminal(TIE),
            Mark::Empty => {}
        }

        let (mark, mut best) = if maximizing {
            (Mark::PlayerOne, Evaluation::new(-SEARCH_BOUND, None))
        } else {
            (self.player, Evaluation::new(SEARCH_BOUND, None))
        };

        for mv in board.list_empty_cells() {
            let mut child = *board;
            child.place_unchecked(mv, mark);
            let score = self.minimax(&child, !maximizing).score;
            let improves = if maximizing {
                score > best.score
            } else {
                score < best.score
            };
            if improves {
                best = Evaluation::new(score, Some(mv));
            }
        }

        best
    }

    /// Minimax result for an undecided board, starting on the given side.
    #[instrument(skip(self, board), fields(player = ?self.player, marks = board.mark_count()))]
    pub fn analyze(&self, board: &Board, maximizing: bool) -> Result<Evaluation, SearchError> {
        Self::ensure_playable(board)?;
        Ok(self.minimax(board, maximizing))
    }

    /// Selects the engine's next move.
    ///
    /// Fails on a board that is already decided.
    #[instrument(skip(self, board), fields(level = self.level, player = ?self.player))]
    pub fn select_move(&self, board: &Board) -> Result<Move, SearchError> {
        Self::ensure_playable(board)?;
        match self.strategy() {
            Strategy::Random => {
                let mv = self.choose_random(board)?;
                info!(%mv, eval = "random", "Engine has chosen move");
                Ok(mv)
            }
            Strategy::Minimax => {
                let evaluation = self.minimax(board, false);
                let mv = evaluation
                    .best_move()
                    .ok_or(SearchError::NoMovesAvailable)?;
                info!(%mv, eval = evaluation.score(), "Engine has chosen move");
                Ok(mv)
            }
        }
    }

    fn ensure_playable(board: &Board) -> Result<(), SearchError> {
        match board.status() {
            GameStatus::InProgress => Ok(()),
            GameStatus::Won(mark) => Err(SearchError::GameOver(mark)),
            GameStatus::Draw => Err(SearchError::NoMovesAvailable),
        }
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self {
            level: 1,
            player: Mark::PlayerTwo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    fn mv(row: usize, col: usize) -> Move {
        Move::new(row, col).unwrap()
    }

    #[test]
    fn test_new_rejects_empty_player() {
        assert_eq!(
            SearchEngine::new(1, Mark::Empty),
            Err(SearchError::InvalidPlayer(Mark::Empty))
        );
    }

    #[test]
    fn test_default_engine() {
        let engine = SearchEngine::default();
        assert_eq!(engine.level(), 1);
        assert_eq!(engine.player(), Mark::PlayerTwo);
        assert_eq!(engine.strategy(), Strategy::Minimax);
    }

    #[test]
    fn test_level_zero_is_random() {
        let mut engine = SearchEngine::default();
        engine.set_level(0);
        assert_eq!(engine.strategy(), Strategy::Random);
    }

    #[test]
    fn test_terminal_scores() {
        let engine = SearchEngine::default();
        assert_eq!(
            engine.minimax(&board("XXX/OO./..."), false),
            Evaluation::new(PLAYER_ONE_WIN, None)
        );
        assert_eq!(
            engine.minimax(&board("OOO/XX./X.."), true),
            Evaluation::new(PLAYER_TWO_WIN, None)
        );
        assert_eq!(
            engine.minimax(&board("XOX/OXX/OXO"), true),
            Evaluation::new(TIE, None)
        );
    }

    #[test]
    fn test_maximizer_completes_top_row() {
        let engine = SearchEngine::default();
        let evaluation = engine.minimax(&board("XX./.../..."), true);
        assert_eq!(evaluation.score(), PLAYER_ONE_WIN);
        assert_eq!(evaluation.best_move(), Some(mv(0, 2)));
    }

    #[test]
    fn test_minimizer_takes_win() {
        let engine = SearchEngine::default();
        let evaluation = engine.minimax(&board("OO./XX./..."), false);
        assert_eq!(evaluation.score(), PLAYER_TWO_WIN);
        assert_eq!(evaluation.best_move(), Some(mv(0, 2)));
    }

    #[test]
    fn test_minimizer_blocks_threat() {
        let engine = SearchEngine::default();
        let evaluation = engine.minimax(&board("XX./.O./..."), false);
        assert_eq!(evaluation, Evaluation::new(TIE, Some(mv(0, 2))));
    }

    #[test]
    fn test_equal_scores_keep_first_in_scan_order() {
        // Both (1, 0) and (2, 1) force a PlayerTwo win; the search has no
        // preference for the quicker one.
        let engine = SearchEngine::default();
        let evaluation = engine.minimax(&board("XOX/.O./X.."), false);
        assert_eq!(evaluation, Evaluation::new(PLAYER_TWO_WIN, Some(mv(1, 0))));
    }

    #[test]
    fn test_random_choice_is_empty_cell() {
        let engine = SearchEngine::new(0, Mark::PlayerTwo).unwrap();
        let b = board("XO./.X./O..");
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let choice = engine.choose_random_with(&b, &mut rng).unwrap();
            assert!(b.list_empty_cells().contains(&choice));
        }
    }

    #[test]
    fn test_random_choice_on_full_board_fails() {
        let engine = SearchEngine::new(0, Mark::PlayerTwo).unwrap();
        assert_eq!(
            engine.choose_random(&board("XOX/OXX/OXO")),
            Err(SearchError::NoMovesAvailable)
        );
    }

    #[test]
    fn test_select_move_rejects_finished_board() {
        let engine = SearchEngine::default();
        assert_eq!(
            engine.select_move(&board("XXX/OO./...")),
            Err(SearchError::GameOver(Mark::PlayerOne))
        );
        assert_eq!(
            engine.select_move(&board("XOX/OXX/OXO")),
            Err(SearchError::NoMovesAvailable)
        );
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let engine = SearchEngine::default();
        let b = board("X../.../...");
        let copy = b;
        engine.minimax(&b, false);
        assert_eq!(b, copy);
        assert_eq!(b.mark_count(), 1);
    }
}
