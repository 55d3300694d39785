//! Game rules for 4x4 tic-tac-toe.
//!
//! Pure functions over a [`Board`]: move validation, win and draw
//! detection. Nothing here performs I/O or mutates state.

pub mod draw;
pub mod validate;
pub mod win;

pub use draw::is_full;
pub use validate::{is_valid_input, is_valid_move, validate_input, validate_position};
pub use win::check_winner;

use crate::patterns::WinPattern;
use crate::types::{Board, Mark};
use serde::Serialize;
use tracing::instrument;

/// Outcome of the game after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameResult {
    /// Game is ongoing.
    InProgress,
    /// `mark` completed `pattern`.
    Win {
        /// The winning mark.
        mark: Mark,
        /// First completed line in scan order.
        pattern: &'static WinPattern,
    },
    /// Board full with no winner.
    Draw,
}

impl GameResult {
    /// True unless the game is still in progress.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    /// The winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameResult::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }
}

/// Evaluates the board after `mark` has moved: a win for `mark` is checked
/// first, then a full board.
#[instrument]
pub fn evaluate(board: &Board, mark: Mark) -> GameResult {
    if let Some(pattern) = check_winner(board, mark) {
        GameResult::Win { mark, pattern }
    } else if is_full(board) {
        GameResult::Draw
    } else {
        GameResult::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_in_progress() {
        let board = Board::from_layout("XO..............").unwrap();
        assert_eq!(evaluate(&board, Mark::X), GameResult::InProgress);
    }

    #[test]
    fn test_evaluate_win_beats_full() {
        let board = Board::from_layout("XXXXOOXOXOOXOXOO").unwrap();
        let result = evaluate(&board, Mark::X);
        assert_eq!(result.winner(), Some(Mark::X));
        assert!(result.is_over());
    }

    #[test]
    fn test_evaluate_only_checks_mover() {
        let board = Board::from_layout("OOOO............").unwrap();
        assert_eq!(evaluate(&board, Mark::X), GameResult::InProgress);
    }
}
