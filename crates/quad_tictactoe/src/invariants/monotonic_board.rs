//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::{Board, Game};

/// Invariant: occupied squares are never overwritten.
///
/// Replaying the move history onto an empty board must never hit an occupied
/// square, and must reproduce the current board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<Game> for MonotonicBoardInvariant {
    fn holds(game: &Game) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            if !reconstructed.is_empty(mov.position) {
                return false;
            }
            reconstructed.apply_move(mov.position, mov.mark);
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
