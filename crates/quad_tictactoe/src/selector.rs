//! Heuristic move selection for the computer opponent.
//!
//! The cascade, re-evaluated from scratch every turn:
//!
//! 1. complete a line of our own (win now),
//! 2. fill the gap in an opponent's three-in-a-line (block),
//! 3. take a free center square, chosen at random,
//! 4. take any free square, chosen at random.
//!
//! The first two tiers are fully deterministic. Random choices go through an
//! [`IndexPicker`] so tests can script them.

use crate::patterns::{CENTER, WIN_PATTERNS};
use crate::position::Position;
use crate::types::{Board, Mark};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// Source of uniform random indices.
pub trait IndexPicker {
    /// Returns an index in `0..len`. Callers never pass `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

impl<P: IndexPicker + ?Sized> IndexPicker for &mut P {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// [`IndexPicker`] backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngPicker<R = ChaCha8Rng> {
    rng: R,
}

impl<R: Rng> RngPicker<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngPicker<ChaCha8Rng> {
    /// Deterministic picker: the same seed yields the same choices.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Picker seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> IndexPicker for RngPicker<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// [`IndexPicker`] that replays a fixed script, cycling when exhausted.
///
/// Each scripted value is reduced modulo the requested length, so any
/// script is usable against any candidate list.
#[derive(Debug, Clone)]
pub struct ScriptedPicker {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedPicker {
    /// Creates a picker from a script. An empty script always picks 0.
    pub fn new(script: impl Into<Vec<usize>>) -> Self {
        Self {
            script: script.into(),
            cursor: 0,
        }
    }

    /// How many picks have been made.
    pub fn calls(&self) -> usize {
        self.cursor
    }
}

impl IndexPicker for ScriptedPicker {
    fn pick(&mut self, len: usize) -> usize {
        let value = if self.script.is_empty() {
            0
        } else {
            self.script[self.cursor % self.script.len()]
        };
        self.cursor += 1;
        value % len
    }
}

/// Which rule of the cascade produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display, strum::EnumIter)]
pub enum SelectionTier {
    /// Completes one of our lines.
    #[strum(to_string = "win")]
    Win,
    /// Blocks an opponent line.
    #[strum(to_string = "block")]
    Block,
    /// Random free center square.
    #[strum(to_string = "center")]
    Center,
    /// Random free square.
    #[strum(to_string = "any")]
    Any,
}

/// A chosen move and the rule that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Selection {
    /// Square to play.
    pub position: Position,
    /// Rule that fired.
    pub tier: SelectionTier,
}

/// The selector could not produce a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SelectError {
    /// Every square is occupied.
    #[display("No legal move: the board is full")]
    NoLegalMove,
}

/// First empty square (in line scan order) that would give `mark` four in a
/// line, i.e. the gap in a line holding exactly three of `mark` and one empty.
#[instrument]
pub fn completing_move(board: &Board, mark: Mark) -> Option<Position> {
    WIN_PATTERNS
        .iter()
        .find_map(|pattern| pattern.completing_cell(board, mark))
}

/// Computer opponent using the fixed win > block > center > any cascade.
#[derive(Debug, Clone)]
pub struct HeuristicSelector<P = RngPicker> {
    picker: P,
}

impl<P: IndexPicker> HeuristicSelector<P> {
    /// Creates a selector drawing random choices from `picker`.
    pub fn new(picker: P) -> Self {
        Self { picker }
    }

    /// Returns the picker.
    pub fn picker(&self) -> &P {
        &self.picker
    }

    /// Chooses a move for `mark` on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::NoLegalMove`] if the board is full. Drivers
    /// check for a full board first, so this is never expected in play.
    #[instrument(skip(self))]
    pub fn select(&mut self, board: &Board, mark: Mark) -> Result<Selection, SelectError> {
        let selection = if let Some(position) = completing_move(board, mark) {
            Selection {
                position,
                tier: SelectionTier::Win,
            }
        } else if let Some(position) = completing_move(board, mark.opponent()) {
            Selection {
                position,
                tier: SelectionTier::Block,
            }
        } else {
            let center: Vec<Position> = CENTER
                .iter()
                .copied()
                .filter(|&pos| board.is_empty(pos))
                .collect();

            if let Some(position) = self.choose(&center) {
                Selection {
                    position,
                    tier: SelectionTier::Center,
                }
            } else {
                let position = self.choose(&board.empty_positions()).ok_or_else(|| {
                    warn!(%mark, "Move requested on a full board");
                    SelectError::NoLegalMove
                })?;
                Selection {
                    position,
                    tier: SelectionTier::Any,
                }
            }
        };

        debug!(%mark, position = %selection.position, tier = %selection.tier, "Selected move");
        Ok(selection)
    }

    fn choose(&mut self, candidates: &[Position]) -> Option<Position> {
        if candidates.is_empty() {
            return None;
        }
        candidates.get(self.picker.pick(candidates.len())).copied()
    }
}
