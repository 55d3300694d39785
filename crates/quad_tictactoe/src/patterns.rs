//! The ten winning lines of the 4x4 board.
//!
//! Both win detection and the computer opponent scan [`WIN_PATTERNS`], so the
//! two always agree on iteration order: rows top to bottom, then columns left
//! to right, then the main diagonal, then the anti-diagonal. When several
//! lines complete at once, the first in this order is the one reported.

use crate::position::Position;
use crate::types::{Board, Mark, Square};
use serde::Serialize;

/// Which line a pattern covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
pub enum PatternKind {
    /// Row 0-3, top to bottom.
    #[display("row {}", _0)]
    Row(u8),
    /// Column 0-3, left to right.
    #[display("column {}", _0)]
    Column(u8),
    /// Top-left to bottom-right.
    #[display("diagonal")]
    Diagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

/// Four squares that win when all hold the same mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WinPattern {
    kind: PatternKind,
    cells: [Position; 4],
}

impl WinPattern {
    const fn new(kind: PatternKind, cells: [u8; 4]) -> Self {
        Self {
            kind,
            cells: [
                Position::at(cells[0]),
                Position::at(cells[1]),
                Position::at(cells[2]),
                Position::at(cells[3]),
            ],
        }
    }

    /// Line this pattern covers.
    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    /// The four positions, in board order along the line.
    pub fn cells(&self) -> &[Position; 4] {
        &self.cells
    }

    /// Board indices of the four positions.
    pub fn indices(&self) -> [usize; 4] {
        self.cells.map(Position::index)
    }

    /// True if every square on the line holds `mark`.
    pub fn is_complete(&self, board: &Board, mark: Mark) -> bool {
        self.cells.iter().all(|&pos| board.get(pos).is(mark))
    }

    /// The single empty square on a line holding three of `mark`, if any.
    pub fn completing_cell(&self, board: &Board, mark: Mark) -> Option<Position> {
        let mut owned = 0;
        let mut empty = None;
        for &pos in &self.cells {
            match board.get(pos) {
                Square::Occupied(m) if m == mark => owned += 1,
                Square::Empty if empty.is_none() => empty = Some(pos),
                _ => return None,
            }
        }
        if owned == 3 { empty } else { None }
    }
}

impl std::fmt::Display for WinPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c, d] = self.cells;
        write!(f, "{} [{}, {}, {}, {}]", self.kind, a, b, c, d)
    }
}

/// All winning lines in canonical scan order.
pub static WIN_PATTERNS: [WinPattern; 10] = [
    WinPattern::new(PatternKind::Row(0), [0, 1, 2, 3]),
    WinPattern::new(PatternKind::Row(1), [4, 5, 6, 7]),
    WinPattern::new(PatternKind::Row(2), [8, 9, 10, 11]),
    WinPattern::new(PatternKind::Row(3), [12, 13, 14, 15]),
    WinPattern::new(PatternKind::Column(0), [0, 4, 8, 12]),
    WinPattern::new(PatternKind::Column(1), [1, 5, 9, 13]),
    WinPattern::new(PatternKind::Column(2), [2, 6, 10, 14]),
    WinPattern::new(PatternKind::Column(3), [3, 7, 11, 15]),
    WinPattern::new(PatternKind::Diagonal, [0, 5, 10, 15]),
    WinPattern::new(PatternKind::AntiDiagonal, [3, 6, 9, 12]),
];

/// The four central squares the computer prefers.
pub const CENTER: [Position; 4] = [
    Position::at(5),
    Position::at(6),
    Position::at(9),
    Position::at(10),
];
