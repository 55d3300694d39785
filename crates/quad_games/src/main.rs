//! 4x4 Tic-Tac-Toe in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use quad_games::{Cli, ConsoleTerminal, GameConfig, SessionOutcome, run_session};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    initialize_tracing(&config)?;

    info!(mode = ?cli.mode, seed = ?config.seed(), "Starting quad_games");

    let mut terminal = ConsoleTerminal::stdio(&config);
    match run_session(&mut terminal, &config, cli.mode)? {
        SessionOutcome::Finished { games_played } => {
            info!(games_played, "Exiting after final game")
        }
        SessionOutcome::Quit { games_played } => info!(games_played, "Exiting on quit"),
    }

    Ok(())
}

/// Config file (if present) with command-line overrides applied.
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(ms) = cli.thinking_delay_ms {
        config = config.with_thinking_delay_ms(ms);
    }
    if cli.no_clear {
        config = config.with_clear_screen(false);
    }
    if let Some(path) = &cli.log_file {
        config = config.with_log_file(path.clone());
    }

    Ok(config)
}

/// Logs go to a file so they never interleave with the board.
fn initialize_tracing(config: &GameConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
