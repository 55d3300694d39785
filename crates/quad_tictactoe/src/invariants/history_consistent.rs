//! History consistency invariant: one occupied square per recorded move.

use super::Invariant;
use crate::Game;

/// Invariant: the number of occupied squares equals the number of moves.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        game.board().occupied_count() == game.history().len()
    }

    fn description() -> &'static str {
        "Occupied squares match the move history"
    }
}
