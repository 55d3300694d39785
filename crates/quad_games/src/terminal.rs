//! The terminal collaborator: everything the game loop shows or asks.
//!
//! The game loop only talks to [`Terminal`]. [`ConsoleTerminal`] implements
//! it over any line reader and writer, which is stdin/stdout in the binary
//! and in-memory buffers in tests.

use crate::config::GameConfig;
use crate::mode::GameMode;
use crate::render;
use anyhow::{Context, Result};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use quad_tictactoe::{Board, GameResult, Mark, Position, rules};
use std::io::{self, BufRead, Write};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// What a human typed at the move prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HumanInput {
    /// A validated, empty square.
    Move(Position),
    /// The player asked to stop (or input ended).
    Quit,
}

/// Display and input operations the game loop relies on.
pub trait Terminal {
    /// Asks `mark` for a move until the answer is a valid square or a quit.
    fn request_human_move(&mut self, board: &Board, mark: Mark) -> Result<HumanInput>;

    /// Shows the board.
    fn render_board(&mut self, board: &Board) -> Result<()>;

    /// Shows the final result. `winner_name` labels the winning side.
    fn announce_result(&mut self, result: &GameResult, winner_name: Option<&str>) -> Result<()>;

    /// Pacing shown before the computer's move.
    fn show_thinking(&mut self) -> Result<()>;

    /// Reports the square the computer chose.
    fn announce_computer_move(&mut self, position: Position) -> Result<()>;

    /// Pacing after the computer's move, before the next render.
    fn pause_after_computer(&mut self) -> Result<()>;

    /// Shows the welcome banner.
    fn welcome(&mut self) -> Result<()>;

    /// Shows the rules and asks for a mode. `None` means input ended.
    fn select_mode(&mut self) -> Result<Option<GameMode>>;

    /// Waits for Enter. Returns `false` if input ended.
    fn wait_for_start(&mut self) -> Result<bool>;

    /// Asks whether to play again.
    fn play_again(&mut self) -> Result<bool>;

    /// Shows the farewell banner.
    fn goodbye(&mut self) -> Result<()>;
}

/// Line-oriented console terminal.
pub struct ConsoleTerminal<R, W> {
    input: R,
    output: W,
    thinking_delay: Duration,
    post_move_delay: Duration,
    clear_screen: bool,
}

impl ConsoleTerminal<io::StdinLock<'static>, io::Stdout> {
    /// Console on the process's stdin and stdout.
    pub fn stdio(config: &GameConfig) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), config)
    }
}

impl<R: BufRead, W: Write> ConsoleTerminal<R, W> {
    /// Creates a console over the given reader and writer.
    pub fn new(input: R, output: W, config: &GameConfig) -> Self {
        Self {
            input,
            output,
            thinking_delay: config.thinking_delay(),
            post_move_delay: config.post_move_delay(),
            clear_screen: *config.clear_screen(),
        }
    }

    /// Consumes the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints `prompt` and reads one line. `None` on end of input.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            debug!("Input closed");
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        if self.clear_screen {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))
                .context("Failed to clear screen")?;
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> Terminal for ConsoleTerminal<R, W> {
    #[instrument(skip(self, board))]
    fn request_human_move(&mut self, board: &Board, mark: Mark) -> Result<HumanInput> {
        loop {
            let prompt = format!("Player {}, enter cell number (0-15) or 'quit': ", mark);
            let Some(line) = self.prompt(&prompt)? else {
                return Ok(HumanInput::Quit);
            };

            if line.eq_ignore_ascii_case("quit") {
                info!(%mark, "Player quit");
                return Ok(HumanInput::Quit);
            }

            match rules::validate_input(board, &line) {
                Ok(pos) => return Ok(HumanInput::Move(pos)),
                Err(e) => {
                    debug!(input = %line, error = %e, "Rejected move");
                    self.say(&format!(
                        "❌ Invalid move! Cell must be between 0-15 and empty. ({})",
                        e
                    ))?;
                }
            }
        }
    }

    fn render_board(&mut self, board: &Board) -> Result<()> {
        self.clear()?;
        self.say(&render::board_grid(board))
    }

    fn announce_result(&mut self, result: &GameResult, winner_name: Option<&str>) -> Result<()> {
        self.say(&render::result_banner(result, winner_name))
    }

    fn show_thinking(&mut self) -> Result<()> {
        write!(self.output, "\n🤖 Computer is thinking")?;
        self.output.flush()?;
        let step = self.thinking_delay / 3;
        for _ in 0..3 {
            if !step.is_zero() {
                std::thread::sleep(step);
            }
            write!(self.output, ".")?;
            self.output.flush()?;
        }
        writeln!(self.output)?;
        Ok(())
    }

    fn announce_computer_move(&mut self, position: Position) -> Result<()> {
        self.say(&format!("   Computer plays at position {}", position))
    }

    fn pause_after_computer(&mut self) -> Result<()> {
        if !self.post_move_delay.is_zero() {
            std::thread::sleep(self.post_move_delay);
        }
        Ok(())
    }

    fn welcome(&mut self) -> Result<()> {
        self.say(&render::welcome())
    }

    fn select_mode(&mut self) -> Result<Option<GameMode>> {
        self.say(&render::instructions())?;
        self.say(render::mode_menu())?;
        loop {
            let Some(line) = self.prompt("\nEnter your choice (1 or 2): ")? else {
                return Ok(None);
            };
            match GameMode::from_menu_choice(&line) {
                Some(mode) => {
                    self.say(&format!("\n✓ {} mode selected!", mode))?;
                    if mode == GameMode::PlayerVsComputer {
                        self.say("  You are X, Computer is O")?;
                    }
                    return Ok(Some(mode));
                }
                None => self.say("❌ Invalid choice. Please enter 1 or 2.")?,
            }
        }
    }

    fn wait_for_start(&mut self) -> Result<bool> {
        Ok(self
            .prompt("\n⏎ Press Enter to start the game...")?
            .is_some())
    }

    fn play_again(&mut self) -> Result<bool> {
        loop {
            let Some(line) = self.prompt("\n🎮 Play again? (yes/no): ")? else {
                return Ok(false);
            };
            match line.to_lowercase().as_str() {
                "yes" | "y" => return Ok(true),
                "no" | "n" => return Ok(false),
                _ => self.say("❌ Please enter 'yes' or 'no'")?,
            }
        }
    }

    fn goodbye(&mut self) -> Result<()> {
        self.say(&render::goodbye())
    }
}
