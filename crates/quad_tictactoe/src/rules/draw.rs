//! Draw detection logic.

use crate::types::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (no empty squares).
///
/// A full board with no winner is a draw.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}
