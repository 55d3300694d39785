//! Move validation.
//!
//! A move is valid iff it names an integer cell in 0-15 and that cell is
//! empty. These checks never panic: any input, numeric or not, yields a
//! yes/no answer (or a [`MoveError`] saying why not).

use crate::action::MoveError;
use crate::position::Position;
use crate::types::Board;
use tracing::{debug, instrument};

/// Validates an integer cell number against the board.
#[instrument]
pub fn validate_position(board: &Board, position: i64) -> Result<Position, MoveError> {
    let pos = usize::try_from(position)
        .ok()
        .and_then(Position::new)
        .ok_or(MoveError::OutOfRange(position))?;

    if !board.is_empty(pos) {
        return Err(MoveError::SquareOccupied(pos));
    }

    Ok(pos)
}

/// Validates raw text (e.g. a line typed by a player) against the board.
///
/// Surrounding whitespace is ignored. Anything that is not a plain integer
/// (`"3.0"`, `"abc"`, `""`) is [`MoveError::NotANumber`].
#[instrument]
pub fn validate_input(board: &Board, raw: &str) -> Result<Position, MoveError> {
    let trimmed = raw.trim();
    let number: i64 = trimmed.parse().map_err(|_| {
        debug!(input = trimmed, "Rejected non-numeric move");
        MoveError::NotANumber(trimmed.to_string())
    })?;
    validate_position(board, number)
}

/// True iff `position` is in 0-15 and that cell is empty.
pub fn is_valid_move(board: &Board, position: i64) -> bool {
    validate_position(board, position).is_ok()
}

/// True iff `raw` parses as a valid move for this board.
pub fn is_valid_input(board: &Board, raw: &str) -> bool {
    validate_input(board, raw).is_ok()
}
