//! Text rendering for the console: board grid, banners, instructions.

use quad_tictactoe::{Board, GameResult, Mark, Position, SIDE, Square};

/// Horizontal rule used around banners.
const RULE: &str = "══════════════════════════════════════════════════";

/// Renders the board as a box grid. Empty squares show their number so
/// players know what to type.
pub fn board_grid(board: &Board) -> String {
    let mut out = String::from("\n  ╔═════╦═════╦═════╦═════╗\n");
    for row in 0..SIDE {
        out.push_str("  ║");
        for col in 0..SIDE {
            let index = row * SIDE + col;
            let cell = match Position::new(index).map(|pos| board.get(pos)) {
                Some(Square::Occupied(Mark::X)) => "  X  ".to_string(),
                Some(Square::Occupied(Mark::O)) => "  O  ".to_string(),
                _ => format!(" {:>2}  ", index),
            };
            out.push_str(&cell);
            out.push('║');
        }
        out.push('\n');
        if row + 1 < SIDE {
            out.push_str("  ╠═════╬═════╬═════╬═════╣\n");
        }
    }
    out.push_str("  ╚═════╩═════╩═════╩═════╝\n");
    out
}

/// Welcome banner shown once per session.
pub fn welcome() -> String {
    format!("\n╔{RULE}╗\n║  Welcome to 4x4 Tic-Tac-Toe!{:22}║\n╚{RULE}╝", "")
}

/// Rules and controls.
pub fn instructions() -> String {
    [
        "",
        RULE,
        "         4x4 TIC-TAC-TOE GAME",
        RULE,
        "",
        "📋 Game Rules:",
        "   • The board is 4x4 (16 cells)",
        "   • Players take turns placing X or O",
        "   • Get 4 in a row to win (horizontal, vertical, or diagonal)",
        "   • Cells are numbered 0-15",
        "",
        "🎮 How to play:",
        "   • Enter the cell number (0-15) when prompted",
        "   • Type 'quit' to exit the game",
        "",
        RULE,
    ]
    .join("\n")
}

/// Mode selection menu.
pub fn mode_menu() -> &'static str {
    "\n🎯 Select Game Mode:\n   1. Player vs Player\n   2. Player vs Computer"
}

/// End-of-game banner. `winner_name` labels the winning side.
pub fn result_banner(result: &GameResult, winner_name: Option<&str>) -> String {
    match result {
        GameResult::Win { mark, pattern } => {
            let name = winner_name
                .map(str::to_string)
                .unwrap_or_else(|| format!("Player {}", mark));
            let [a, b, c, d] = pattern.indices();
            format!(
                "╔{RULE}╗\n  🎉 {} wins!\n╚{RULE}╝\n\n🏆 Winning positions: [{}, {}, {}, {}] ({})",
                name,
                a,
                b,
                c,
                d,
                pattern.kind()
            )
        }
        GameResult::Draw => format!("╔{RULE}╗\n  🤝 It's a draw!\n╚{RULE}╝"),
        GameResult::InProgress => String::new(),
    }
}

/// Farewell banner.
pub fn goodbye() -> String {
    format!("\n╔{RULE}╗\n  Thanks for playing! Goodbye! 👋\n╚{RULE}╝\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use quad_tictactoe::rules::evaluate;

    #[test]
    fn test_grid_shows_numbers_and_marks() {
        let board = Board::from_layout("X..............O").unwrap();
        let grid = board_grid(&board);
        assert!(grid.contains("  X  ║"));
        assert!(grid.contains("  O  ║"));
        assert!(grid.contains(" 14  ║"));
        assert!(grid.contains("  1  ║"));
        assert!(!grid.contains("  0  ║"));
    }

    #[test]
    fn test_win_banner_lists_positions() {
        let board = Board::from_layout("...O..O..O..O...").unwrap();
        let banner = result_banner(&evaluate(&board, Mark::O), Some("Computer (O)"));
        assert!(banner.contains("Computer (O) wins!"));
        assert!(banner.contains("[3, 6, 9, 12]"));
        assert!(banner.contains("anti-diagonal"));
    }

    #[test]
    fn test_draw_banner() {
        let board = Board::from_layout("XXOOOOXXXXOOOOXX").unwrap();
        assert!(result_banner(&evaluate(&board, Mark::X), None).contains("draw"));
    }
}
