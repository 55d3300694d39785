//! Validated board positions (0-15).

use crate::types::{CELL_COUNT, SIDE};
use serde::{Deserialize, Serialize};

/// A square index on the 4x4 board, numbered 0-15 in row-major order.
///
/// A `Position` is always in range, so anything holding one can index the
/// board without further checks. Occupancy is a separate question answered
/// by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Position(u8);

impl Position {
    /// Creates a position from a board index, or `None` if out of range.
    pub fn new(index: usize) -> Option<Self> {
        (index < CELL_COUNT).then_some(Self(index as u8))
    }

    /// Creates a position at compile time. Panics on an out-of-range index.
    pub const fn at(index: u8) -> Self {
        assert!((index as usize) < CELL_COUNT, "position out of range");
        Self(index)
    }

    /// Board index (0-15).
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Row (0-3).
    pub fn row(self) -> usize {
        self.index() / SIDE
    }

    /// Column (0-3).
    pub fn column(self) -> usize {
        self.index() % SIDE
    }

    /// All 16 positions in ascending order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELL_COUNT as u8).map(Position)
    }
}

impl TryFrom<u8> for Position {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value as usize).ok_or_else(|| format!("position {} out of range", value))
    }
}

impl From<Position> for u8 {
    fn from(pos: Position) -> Self {
        pos.0
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range() {
        assert!(Position::new(0).is_some());
        assert!(Position::new(15).is_some());
        assert!(Position::new(16).is_none());
    }

    #[test]
    fn test_row_and_column() {
        let pos = Position::at(9);
        assert_eq!(pos.row(), 2);
        assert_eq!(pos.column(), 1);
    }

    #[test]
    fn test_all_is_ordered() {
        let indices: Vec<usize> = Position::all().map(Position::index).collect();
        assert_eq!(indices, (0..16).collect::<Vec<_>>());
    }
}
