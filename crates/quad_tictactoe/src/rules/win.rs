//! Win detection logic.

use crate::patterns::{WIN_PATTERNS, WinPattern};
use crate::types::{Board, Mark};
use tracing::instrument;

/// Returns the first line (rows, then columns, then diagonals) that `mark`
/// fully occupies, or `None`.
#[instrument]
pub fn check_winner(board: &Board, mark: Mark) -> Option<&'static WinPattern> {
    WIN_PATTERNS
        .iter()
        .find(|pattern| pattern.is_complete(board, mark))
}
