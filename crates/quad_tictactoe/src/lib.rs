//! Pure 4x4 tic-tac-toe game logic.
//!
//! Two layers, neither of which performs I/O:
//!
//! - **Board engine** ([`rules`], [`Board`], [`WIN_PATTERNS`]): move
//!   validation, win detection, draw detection.
//! - **Move selector** ([`HeuristicSelector`]): the computer opponent's
//!   win > block > center > any cascade.
//!
//! [`Game`] ties them together as an explicit state value for a driver loop.
//!
//! # Example
//!
//! ```
//! use quad_tictactoe::{Game, GameResult, HeuristicSelector, Mark, ScriptedPicker};
//!
//! let mut game = Game::new(Mark::X);
//! let mut computer = HeuristicSelector::new(ScriptedPicker::new(vec![0]));
//!
//! let selection = computer.select(game.board(), game.to_move()).unwrap();
//! assert_eq!(game.place(selection.position), Ok(GameResult::InProgress));
//! assert!(!quad_tictactoe::rules::is_valid_move(game.board(), selection.position.index() as i64));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod patterns;
mod position;
mod selector;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError};
pub use game::Game;
pub use patterns::{CENTER, PatternKind, WIN_PATTERNS, WinPattern};
pub use position::Position;
pub use rules::GameResult;
pub use selector::{
    HeuristicSelector, IndexPicker, RngPicker, ScriptedPicker, SelectError, Selection,
    SelectionTier, completing_move,
};
pub use types::{Board, CELL_COUNT, Mark, SIDE, Square};
