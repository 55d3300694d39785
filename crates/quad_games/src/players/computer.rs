//! Computer player backed by the heuristic move selector.

use super::{Player, Turn};
use crate::terminal::Terminal;
use anyhow::{Context, Result};
use quad_tictactoe::{Game, HeuristicSelector, IndexPicker};
use tracing::{debug, instrument};

/// Computer opponent.
pub struct ComputerPlayer<P> {
    name: String,
    selector: HeuristicSelector<P>,
}

impl<P: IndexPicker> ComputerPlayer<P> {
    /// Creates a computer player drawing random choices from `picker`.
    pub fn new(name: impl Into<String>, picker: P) -> Self {
        Self {
            name: name.into(),
            selector: HeuristicSelector::new(picker),
        }
    }
}

impl<P: IndexPicker> Player for ComputerPlayer<P> {
    #[instrument(skip_all, fields(ai = %self.name))]
    fn choose_move(&mut self, game: &Game, terminal: &mut dyn Terminal) -> Result<Turn> {
        terminal.show_thinking()?;

        let selection = self
            .selector
            .select(game.board(), game.to_move())
            .context("Computer asked to move on a finished board")?;
        debug!(position = %selection.position, tier = %selection.tier, "AI chose position");

        terminal.announce_computer_move(selection.position)?;
        Ok(Turn::Play(selection.position))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_computer(&self) -> bool {
        true
    }
}
