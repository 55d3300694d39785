//! Game state and the per-move transition.

use crate::action::{Move, MoveError};
use crate::invariants::{GameInvariants, InvariantSet};
use crate::position::Position;
use crate::rules::{self, GameResult};
use crate::types::{Board, Mark};
use tracing::{debug, info, instrument};

/// One game: the board, whose turn it is, the result so far and the moves
/// played. A new game starts from a fresh value; nothing is shared between
/// games.
#[derive(Debug, Clone)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) to_move: Mark,
    pub(crate) result: GameResult,
    pub(crate) history: Vec<Move>,
}

impl Game {
    /// Creates an empty game with `first` to move.
    #[instrument]
    pub fn new(first: Mark) -> Self {
        Self {
            board: Board::new(),
            to_move: first,
            result: GameResult::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark whose turn it is. After the game ends this is the mark that
    /// made the final move.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Result after the last move.
    pub fn result(&self) -> GameResult {
        self.result
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.result.is_over()
    }

    /// Moves played so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places the current mark at `pos` and advances the game.
    ///
    /// Order of checks after the mark is written: a win for the mover ends
    /// the game, otherwise a full board is a draw, otherwise the turn passes
    /// to the opponent.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] once the game has finished,
    /// [`MoveError::SquareOccupied`] if `pos` is taken. The game is unchanged
    /// on error.
    #[instrument(skip(self), fields(mark = %self.to_move))]
    pub fn place(&mut self, pos: Position) -> Result<GameResult, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let mark = self.to_move;
        self.board.apply_move(pos, mark);
        self.history.push(Move::new(mark, pos));

        self.result = rules::evaluate(&self.board, mark);
        match self.result {
            GameResult::InProgress => self.to_move = mark.opponent(),
            GameResult::Win { pattern, .. } => {
                info!(%mark, %pattern, moves = self.history.len(), "Game won")
            }
            GameResult::Draw => info!(moves = self.history.len(), "Game drawn"),
        }

        debug_assert!(
            GameInvariants::check_all(self).is_ok(),
            "game invariants violated after {}",
            pos
        );
        debug!(%pos, result = ?self.result, "Move applied");
        Ok(self.result)
    }

    /// Replays a sequence of positions from a fresh game.
    ///
    /// # Errors
    ///
    /// Returns the first move error encountered.
    #[instrument]
    pub fn replay(first: Mark, positions: &[Position]) -> Result<Self, MoveError> {
        let mut game = Self::new(first);
        for &pos in positions {
            game.place(pos)?;
        }
        Ok(game)
    }
}
