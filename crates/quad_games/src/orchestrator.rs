//! Game orchestration between two players.

use crate::players::{Player, Turn};
use crate::terminal::Terminal;
use anyhow::{Context, Result};
use quad_tictactoe::{Game, GameResult, Mark};
use tracing::{debug, info, instrument};

/// How a single game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// Played to a win or draw.
    Finished(GameResult),
    /// A player quit mid-game.
    Quit,
}

/// Runs one game between two players.
pub struct Orchestrator<'a> {
    game: Game,
    player_x: Box<dyn Player + 'a>,
    player_o: Box<dyn Player + 'a>,
}

impl<'a> Orchestrator<'a> {
    /// Creates an orchestrator for a fresh game, X to move first.
    pub fn new(player_x: Box<dyn Player + 'a>, player_o: Box<dyn Player + 'a>) -> Self {
        Self {
            game: Game::new(Mark::X),
            player_x,
            player_o,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    fn player(&self, mark: Mark) -> &dyn Player {
        match mark {
            Mark::X => self.player_x.as_ref(),
            Mark::O => self.player_o.as_ref(),
        }
    }

    /// Runs the game loop until it ends or a player quits.
    ///
    /// Each turn: render, ask the player to move, apply the move. The game
    /// itself decides win, then draw, then passes the turn.
    #[instrument(skip_all)]
    pub fn run(&mut self, terminal: &mut dyn Terminal) -> Result<GameOutcome> {
        info!(
            x = %self.player_x.name(),
            o = %self.player_o.name(),
            "Starting game"
        );

        loop {
            terminal.render_board(self.game.board())?;

            let mark = self.game.to_move();
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            debug!(player = %player.name(), %mark, "Waiting for move");

            let position = match player.choose_move(&self.game, terminal)? {
                Turn::Play(position) => position,
                Turn::Quit => {
                    info!(player = %player.name(), "Player quit mid-game");
                    return Ok(GameOutcome::Quit);
                }
            };
            let mover_is_computer = player.is_computer();

            let result = self
                .game
                .place(position)
                .with_context(|| format!("{} made an illegal move", mark))?;

            if result.is_over() {
                terminal.render_board(self.game.board())?;
                let winner_name = result.winner().map(|m| self.player(m).name().to_string());
                terminal.announce_result(&result, winner_name.as_deref())?;
                info!(?result, "Game over");
                return Ok(GameOutcome::Finished(result));
            }

            if mover_is_computer {
                terminal.pause_after_computer()?;
            }
        }
    }
}
