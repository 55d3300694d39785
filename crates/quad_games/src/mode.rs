//! Game modes.

use serde::{Deserialize, Serialize};

/// Who plays O. X is always a human.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
    strum::EnumIter,
)]
pub enum GameMode {
    /// Two humans share the keyboard.
    #[value(name = "pvp")]
    #[strum(to_string = "Player vs Player")]
    PlayerVsPlayer,
    /// Human X against the computer as O.
    #[value(name = "pvc")]
    #[strum(to_string = "Player vs Computer")]
    PlayerVsComputer,
}

impl GameMode {
    /// Parses a menu choice (`"1"` or `"2"`).
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(GameMode::PlayerVsPlayer),
            "2" => Some(GameMode::PlayerVsComputer),
            _ => None,
        }
    }
}
