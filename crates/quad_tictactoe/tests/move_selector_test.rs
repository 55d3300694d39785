//! Tests for the computer opponent's move cascade.

use quad_tictactoe::{
    Board, Game, GameResult, HeuristicSelector, Mark, Position, RngPicker, ScriptedPicker,
    SelectError, SelectionTier, CENTER,
};

fn board(layout: &str) -> Board {
    Board::from_layout(layout).expect("valid layout")
}

#[test]
fn test_completes_row_zero() {
    let board = board("OOO.............");
    for seed in 0..20 {
        let mut selector = HeuristicSelector::new(RngPicker::seeded(seed));
        let selection = selector.select(&board, Mark::O).unwrap();
        assert_eq!(selection.position, Position::at(3));
        assert_eq!(selection.tier, SelectionTier::Win);
    }
}

#[test]
fn test_blocks_column_zero() {
    let board = board("X...X...X.......");
    for seed in 0..20 {
        let mut selector = HeuristicSelector::new(RngPicker::seeded(seed));
        let selection = selector.select(&board, Mark::O).unwrap();
        assert_eq!(selection.position, Position::at(12));
        assert_eq!(selection.tier, SelectionTier::Block);
    }
}

#[test]
fn test_first_winning_line_in_scan_order() {
    // O can finish column 1 (gap 13) or the diagonal (gap 15); the column
    // comes first.
    let board = board("OO...O...OO.....");
    let selection = HeuristicSelector::new(ScriptedPicker::new(vec![0]))
        .select(&board, Mark::O)
        .unwrap();
    assert_eq!(selection.position, Position::at(13));
}

#[test]
fn test_win_preferred_over_block_for_x() {
    let board = board("OOO.XXX.........");
    let selection = HeuristicSelector::new(ScriptedPicker::new(vec![0]))
        .select(&board, Mark::X)
        .unwrap();
    assert_eq!(selection.position, Position::at(7));
    assert_eq!(selection.tier, SelectionTier::Win);
}

#[test]
fn test_opening_move_is_a_center_square() {
    for seed in 0..50 {
        let mut selector = HeuristicSelector::new(RngPicker::seeded(seed));
        let selection = selector.select(&Board::new(), Mark::O).unwrap();
        assert!(CENTER.contains(&selection.position));
        assert_eq!(selection.tier, SelectionTier::Center);
    }
}

#[test]
fn test_scripted_picks_are_reproducible() {
    let board = board("X...............");
    let first = HeuristicSelector::new(ScriptedPicker::new(vec![3]))
        .select(&board, Mark::O)
        .unwrap();
    let second = HeuristicSelector::new(ScriptedPicker::new(vec![3]))
        .select(&board, Mark::O)
        .unwrap();
    assert_eq!(first, second);
    assert_eq!(first.position, Position::at(10));
}

#[test]
fn test_no_legal_move_on_full_board() {
    let board = board("XOXOXOXOOXOXOXOX");
    let mut selector = HeuristicSelector::new(RngPicker::seeded(1));
    assert_eq!(selector.select(&board, Mark::O), Err(SelectError::NoLegalMove));
}

#[test]
fn test_computer_self_play_always_terminates_legally() {
    for seed in 0..25 {
        let mut selector = HeuristicSelector::new(RngPicker::seeded(seed));
        let mut game = Game::new(Mark::X);
        while !game.is_over() {
            let selection = selector.select(game.board(), game.to_move()).unwrap();
            game.place(selection.position).expect("selector picks empty squares");
        }
        assert!(matches!(
            game.result(),
            GameResult::Win { .. } | GameResult::Draw
        ));
    }
}
