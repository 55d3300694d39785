//! A console session: mode selection, games, play-again loop.

use crate::config::GameConfig;
use crate::mode::GameMode;
use crate::orchestrator::{GameOutcome, Orchestrator};
use crate::players::{ComputerPlayer, HumanPlayer, Player};
use crate::terminal::Terminal;
use anyhow::Result;
use quad_tictactoe::{IndexPicker, RngPicker};
use tracing::{info, instrument};

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Player declined to play again.
    Finished {
        /// Games played to a result.
        games_played: usize,
    },
    /// Player quit (typed `quit` or input ended).
    Quit {
        /// Games played to a result before quitting.
        games_played: usize,
    },
}

/// Runs games until the player declines another or quits.
///
/// `mode` skips the menu for every game when set. Games use the seeded
/// picker from `config` if one is configured, so a whole session is
/// reproducible.
#[instrument(skip_all, fields(mode = ?mode))]
pub fn run_session(
    terminal: &mut dyn Terminal,
    config: &GameConfig,
    mode: Option<GameMode>,
) -> Result<SessionOutcome> {
    let mut picker = match config.seed() {
        Some(seed) => RngPicker::seeded(*seed),
        None => RngPicker::from_entropy(),
    };
    let mut games_played = 0;

    terminal.welcome()?;
    loop {
        let chosen = match mode {
            Some(mode) => Some(mode),
            None => terminal.select_mode()?,
        };
        let Some(chosen) = chosen else {
            return quit(terminal, games_played);
        };
        if mode.is_none() && !terminal.wait_for_start()? {
            return quit(terminal, games_played);
        }

        info!(mode = %chosen, game = games_played + 1, "Starting new game");
        let (player_x, player_o) = players_for(chosen, &mut picker);
        let mut orchestrator = Orchestrator::new(player_x, player_o);

        match orchestrator.run(terminal)? {
            GameOutcome::Quit => return quit(terminal, games_played),
            GameOutcome::Finished(_) => games_played += 1,
        }

        if !terminal.play_again()? {
            terminal.goodbye()?;
            info!(games_played, "Session finished");
            return Ok(SessionOutcome::Finished { games_played });
        }
    }
}

fn quit(terminal: &mut dyn Terminal, games_played: usize) -> Result<SessionOutcome> {
    terminal.goodbye()?;
    info!(games_played, "Session quit");
    Ok(SessionOutcome::Quit { games_played })
}

fn players_for<'a, P: IndexPicker + 'a>(
    mode: GameMode,
    picker: &'a mut P,
) -> (Box<dyn Player + 'a>, Box<dyn Player + 'a>) {
    match mode {
        GameMode::PlayerVsPlayer => (
            Box::new(HumanPlayer::new("Player X")),
            Box::new(HumanPlayer::new("Player O")),
        ),
        GameMode::PlayerVsComputer => (
            Box::new(HumanPlayer::new("Player X")),
            Box::new(ComputerPlayer::new("Computer (O)", picker)),
        ),
    }
}
