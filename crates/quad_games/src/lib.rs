//! Console driver for 4x4 tic-tac-toe.
//!
//! Everything around the pure game logic in `quad_tictactoe`: menus,
//! prompts, board rendering, pacing, the turn loop and the session loop.
//!
//! # Architecture
//!
//! - **Terminal**: the display/input collaborator ([`Terminal`],
//!   [`ConsoleTerminal`])
//! - **Players**: human and computer ([`Player`])
//! - **Orchestrator**: one game, turn by turn
//! - **Session**: mode menu and play-again loop
//!
//! # Example
//!
//! ```
//! use quad_games::{ConsoleTerminal, GameConfig, GameMode, SessionOutcome, run_session};
//! use std::io::Cursor;
//!
//! // X plays the top row while O fills the row below.
//! let input = "0\n4\n1\n5\n2\n6\n3\nno\n";
//! let config = GameConfig::instant();
//! let mut terminal = ConsoleTerminal::new(Cursor::new(input), Vec::new(), &config);
//!
//! let outcome = run_session(&mut terminal, &config, Some(GameMode::PlayerVsPlayer)).unwrap();
//! assert_eq!(outcome, SessionOutcome::Finished { games_played: 1 });
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod mode;
mod orchestrator;
mod players;
mod render;
mod session;
mod terminal;

pub use cli::Cli;
pub use config::{ConfigError, GameConfig};
pub use mode::GameMode;
pub use orchestrator::{GameOutcome, Orchestrator};
pub use players::{ComputerPlayer, HumanPlayer, Player, Turn};
pub use session::{SessionOutcome, run_session};
pub use terminal::{ConsoleTerminal, HumanInput, Terminal};
