//! End-to-end tests driving the console with scripted input.

use quad_games::{
    ComputerPlayer, ConsoleTerminal, GameConfig, GameMode, GameOutcome, HumanPlayer,
    Orchestrator, SessionOutcome, run_session,
};
use quad_tictactoe::{GameResult, Mark, ScriptedPicker};
use std::io::Cursor;

type TestConsole = ConsoleTerminal<Cursor<Vec<u8>>, Vec<u8>>;

fn console(input: &str, config: &GameConfig) -> TestConsole {
    ConsoleTerminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), config)
}

fn lines(moves: &[u8]) -> String {
    moves.iter().map(|m| format!("{}\n", m)).collect()
}

fn output(console: TestConsole) -> String {
    String::from_utf8(console.into_output()).expect("utf-8 output")
}

#[test]
fn test_pvp_win_then_decline() {
    let config = GameConfig::instant();
    let input = lines(&[0, 4, 1, 5, 2, 6, 3]) + "no\n";
    let mut terminal = console(&input, &config);

    let outcome = run_session(&mut terminal, &config, Some(GameMode::PlayerVsPlayer)).unwrap();
    assert_eq!(outcome, SessionOutcome::Finished { games_played: 1 });

    let text = output(terminal);
    assert!(text.contains("Player X wins!"));
    assert!(text.contains("Winning positions: [0, 1, 2, 3]"));
    assert!(text.contains("Goodbye"));
}

#[test]
fn test_pvp_draw() {
    let config = GameConfig::instant();
    let input = lines(&[0, 2, 1, 3, 6, 4, 7, 5, 8, 10, 9, 11, 14, 12, 15, 13]) + "n\n";
    let mut terminal = console(&input, &config);

    let outcome = run_session(&mut terminal, &config, Some(GameMode::PlayerVsPlayer)).unwrap();
    assert_eq!(outcome, SessionOutcome::Finished { games_played: 1 });
    assert!(output(terminal).contains("It's a draw!"));
}

#[test]
fn test_play_again_runs_a_fresh_game() {
    let config = GameConfig::instant();
    let game = lines(&[0, 4, 1, 5, 2, 6, 3]);
    let input = format!("{game}yes\n{game}no\n");
    let mut terminal = console(&input, &config);

    let outcome = run_session(&mut terminal, &config, Some(GameMode::PlayerVsPlayer)).unwrap();
    assert_eq!(outcome, SessionOutcome::Finished { games_played: 2 });
    assert_eq!(output(terminal).matches("Player X wins!").count(), 2);
}

#[test]
fn test_quit_mid_game() {
    let config = GameConfig::instant();
    let mut terminal = console("0\nquit\n", &config);

    let outcome = run_session(&mut terminal, &config, Some(GameMode::PlayerVsPlayer)).unwrap();
    assert_eq!(outcome, SessionOutcome::Quit { games_played: 0 });
    assert!(output(terminal).contains("Thanks for playing!"));
}

#[test]
fn test_menu_flow() {
    let config = GameConfig::instant();
    let mut terminal = console("1\n\n0\nquit\n", &config);

    let outcome = run_session(&mut terminal, &config, None).unwrap();
    assert_eq!(outcome, SessionOutcome::Quit { games_played: 0 });

    let text = output(terminal);
    assert!(text.contains("Welcome to 4x4 Tic-Tac-Toe!"));
    assert!(text.contains("Player vs Player mode selected!"));
}

#[test]
fn test_end_of_input_at_menu_quits() {
    let config = GameConfig::instant();
    let mut terminal = console("", &config);

    let outcome = run_session(&mut terminal, &config, None).unwrap();
    assert_eq!(outcome, SessionOutcome::Quit { games_played: 0 });
}

#[test]
fn test_invalid_moves_are_reprompted() {
    let config = GameConfig::instant();
    let input = "0\n0\nfoo\n-1\n4\nquit\n";
    let mut terminal = console(input, &config);

    let outcome = run_session(&mut terminal, &config, Some(GameMode::PlayerVsPlayer)).unwrap();
    assert_eq!(outcome, SessionOutcome::Quit { games_played: 0 });
    assert_eq!(output(terminal).matches("Invalid move!").count(), 3);
}

#[test]
fn test_computer_blocks_column() {
    let config = GameConfig::instant();
    // Computer takes centers 5 and 6, then must block column 0 at 12.
    let mut terminal = console("0\n4\n8\nquit\n", &config);
    let mut orchestrator = Orchestrator::new(
        Box::new(HumanPlayer::new("Player X")),
        Box::new(ComputerPlayer::new("Computer (O)", ScriptedPicker::new(vec![0]))),
    );

    assert_eq!(orchestrator.run(&mut terminal).unwrap(), GameOutcome::Quit);

    let text = output(terminal);
    assert!(text.contains("Computer plays at position 5"));
    assert!(text.contains("Computer plays at position 6"));
    assert!(text.contains("Computer plays at position 12"));
    assert_eq!(orchestrator.game().history().len(), 6);
}

#[test]
fn test_computer_takes_the_win() {
    let config = GameConfig::instant();
    // The computer fills the centers 5, 6, 9, 10, blocks row 0 at 2, then
    // completes column 2 at 14 instead of blocking column 0.
    let mut terminal = console("15\n12\n3\n0\n1\n4\n", &config);
    let mut orchestrator = Orchestrator::new(
        Box::new(HumanPlayer::new("Player X")),
        Box::new(ComputerPlayer::new("Computer (O)", ScriptedPicker::new(vec![0]))),
    );

    let outcome = orchestrator.run(&mut terminal).unwrap();
    match outcome {
        GameOutcome::Finished(GameResult::Win { mark, pattern }) => {
            assert_eq!(mark, Mark::O);
            assert_eq!(pattern.indices(), [2, 6, 10, 14]);
        }
        other => panic!("expected computer win, got {:?}", other),
    }

    let text = output(terminal);
    assert!(text.contains("Computer plays at position 2"));
    assert!(text.contains("Computer plays at position 14"));
    assert!(text.contains("Computer (O) wins!"));
}

#[test]
fn test_seeded_pvc_session_completes() {
    let config = GameConfig::instant().with_seed(7);
    let input: String = (0..16).map(|i| format!("{}\n", i)).collect::<String>() + "no\n";
    let mut terminal = console(&input, &config);

    let outcome = run_session(&mut terminal, &config, Some(GameMode::PlayerVsComputer)).unwrap();
    assert!(matches!(
        outcome,
        SessionOutcome::Finished { .. } | SessionOutcome::Quit { .. }
    ));
}
