//! Command-line interface for quad_games.

use crate::mode::GameMode;
use clap::Parser;
use std::path::PathBuf;

/// 4x4 Tic-Tac-Toe - get four in a row to win
#[derive(Parser, Debug)]
#[command(name = "quad_games")]
#[command(about = "4x4 tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Skip the mode menu
    #[arg(short, long, value_enum)]
    pub mode: Option<GameMode>,

    /// Seed for the computer's random choices
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to a TOML config file
    #[arg(short, long, default_value = "quad_games.toml")]
    pub config: PathBuf,

    /// Do not clear the screen between turns
    #[arg(long)]
    pub no_clear: bool,

    /// Computer thinking pause in milliseconds
    #[arg(long)]
    pub thinking_delay_ms: Option<u64>,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
