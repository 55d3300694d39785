//! Human player reading moves from the terminal.

use super::{Player, Turn};
use crate::terminal::{HumanInput, Terminal};
use anyhow::Result;
use derive_new::new;
use quad_tictactoe::Game;
use tracing::debug;

/// Human player at the keyboard.
#[derive(Debug, Clone, new)]
pub struct HumanPlayer {
    #[new(into)]
    name: String,
}

impl Player for HumanPlayer {
    fn choose_move(&mut self, game: &Game, terminal: &mut dyn Terminal) -> Result<Turn> {
        let turn = match terminal.request_human_move(game.board(), game.to_move())? {
            HumanInput::Move(pos) => Turn::Play(pos),
            HumanInput::Quit => Turn::Quit,
        };
        debug!(player = %self.name, ?turn, "Human chose");
        Ok(turn)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
