//! Full-board and draw detection for tic-tac-toe.

use super::win::winner;
use crate::moves::CELLS;
use crate::{Board, GameStatus, Mark};

/// Checks if all nine squares are marked.
///
/// A full board with no winner indicates a draw.
pub fn is_full(board: &Board) -> bool {
    board.mark_count() == CELLS
}

/// True for a full board with no complete line.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner(board) == Mark::Empty
}

/// Resolves the board into a [`GameStatus`]. A completed line wins even on
/// a full board.
pub fn status(board: &Board) -> GameStatus {
    match winner(board) {
        Mark::Empty if is_full(board) => GameStatus::Draw,
        Mark::Empty => GameStatus::InProgress,
        mark => GameStatus::Won(mark),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Move;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board
            .place_mark(Move::new(1, 1).unwrap(), Mark::PlayerOne)
            .unwrap();
        assert!(!is_full(&board));
        assert_eq!(status(&board), GameStatus::InProgress);
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        assert!(is_full(&board));
        assert!(is_draw(&board));
        assert_eq!(status(&board), GameStatus::Draw);
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert!(!is_draw(&board));
        assert_eq!(status(&board), GameStatus::Won(Mark::PlayerOne));
    }

    #[test]
    fn test_full_board_with_winner_is_won() {
        let board: Board = "XXX/OOX/XOO".parse().unwrap();
        assert!(is_full(&board));
        assert_eq!(status(&board), GameStatus::Won(Mark::PlayerOne));
    }
}
