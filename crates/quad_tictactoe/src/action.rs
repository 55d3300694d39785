//! Moves and move errors.

use crate::position::Position;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// A move: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// Where it is placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position)
    }
}

/// Why a move was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Input was not an integer.
    #[display("{:?} is not a cell number", _0)]
    NotANumber(String),

    /// Integer outside 0-15.
    #[display("Cell {} is out of range (must be 0-15)", _0)]
    OutOfRange(i64),

    /// The square is already taken.
    #[display("Cell {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game has already finished.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
