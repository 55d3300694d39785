//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use crate::terminal::Terminal;
use anyhow::Result;
use quad_tictactoe::{Game, Position};

/// A player's decision for the current turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Place the current mark here.
    Play(Position),
    /// End the session.
    Quit,
}

/// Something that can choose moves.
pub trait Player {
    /// Chooses a move for the mark whose turn it is in `game`.
    fn choose_move(&mut self, game: &Game, terminal: &mut dyn Terminal) -> Result<Turn>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// True for the computer opponent.
    fn is_computer(&self) -> bool {
        false
    }
}
