//! Core domain types for 4x4 tic-tac-toe.

use crate::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of rows (and columns) on the board.
pub const SIDE: usize = 4;

/// Number of squares on the board.
pub const CELL_COUNT: usize = SIDE * SIDE;

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Mark X (goes first).
    X,
    /// Mark O (goes second).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns true if the square holds the given mark.
    pub fn is(self, mark: Mark) -> bool {
        self == Square::Occupied(mark)
    }
}

/// 4x4 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-15).
    pub(crate) squares: [Square; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELL_COUNT],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; CELL_COUNT] {
        &self.squares
    }

    /// Writes `mark` into the square at `pos`.
    ///
    /// The square must be empty. Callers validate first (see
    /// [`crate::rules::validate_input`]); writing over an occupied square is a
    /// programming error and trips a debug assertion.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, pos: Position, mark: Mark) {
        debug_assert!(
            self.is_empty(pos),
            "apply_move on occupied square {}",
            pos
        );
        self.squares[pos.index()] = Square::Occupied(mark);
    }

    /// Empty positions in ascending index order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::all().filter(|&pos| self.is_empty(pos)).collect()
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Builds a board from a 16-character layout string.
    ///
    /// `X` and `O` (either case) are marks; `.`, `_`, `-` and space are empty.
    /// Returns `None` if the layout has the wrong length or an unknown symbol.
    pub fn from_layout(layout: &str) -> Option<Self> {
        let chars: Vec<char> = layout.chars().filter(|c| *c != '\n').collect();
        if chars.len() != CELL_COUNT {
            return None;
        }

        let mut board = Self::new();
        for (slot, c) in board.squares.iter_mut().zip(chars) {
            *slot = match c {
                'X' | 'x' => Square::Occupied(Mark::X),
                'O' | 'o' => Square::Occupied(Mark::O),
                '.' | '_' | '-' | ' ' => Square::Empty,
                _ => return None,
            };
        }
        Some(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, square) in self.squares.iter().enumerate() {
            let symbol = match square {
                Square::Empty => '.',
                Square::Occupied(Mark::X) => 'X',
                Square::Occupied(Mark::O) => 'O',
            };
            write!(f, "{}", symbol)?;
            if i % SIDE == SIDE - 1 && i + 1 < CELL_COUNT {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.occupied_count(), 0);
        assert_eq!(board.empty_positions().len(), CELL_COUNT);
    }

    #[test]
    fn test_apply_move_occupies_square() {
        let mut board = Board::new();
        let pos = Position::new(6).unwrap();
        board.apply_move(pos, Mark::O);
        assert_eq!(board.get(pos), Square::Occupied(Mark::O));
        assert!(!board.is_empty(pos));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_layout_round_trips_through_display() {
        let layout = "XO..\n.X..\n..O.\n...X";
        let board = Board::from_layout(layout).unwrap();
        assert_eq!(board.to_string(), layout);
    }

    #[test]
    fn test_layout_rejects_bad_input() {
        assert!(Board::from_layout("XO").is_none());
        assert!(Board::from_layout("XO..?...........").is_none());
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_board_serializes() {
        let board = Board::from_layout("X...............").unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, back);
    }
}
