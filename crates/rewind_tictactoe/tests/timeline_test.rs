//! Scenario tests for the rewindable timeline.

use rewind_tictactoe::{Board, GameStatus, MoveError, Player, Position, Square, Timeline};

#[test]
fn test_top_row_win() {
    let timeline = Timeline::replay(&[0, 4, 1, 5, 2]).expect("Valid replay");

    assert_eq!(timeline.status(), GameStatus::Won(Player::X));
    assert_eq!(timeline.status().to_string(), "Winner: X");
    assert_eq!(timeline.winning_line().map(|l| l.indices()), Some([0, 1, 2]));
}

#[test]
fn test_full_board_draw() {
    let timeline = Timeline::replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8]).expect("Valid replay");

    assert_eq!(timeline.status(), GameStatus::Draw);
    assert_eq!(timeline.status().to_string(), "Draw");
    assert_eq!(timeline.winning_line(), None);
    assert_eq!(timeline.len(), 10);
}

#[test]
fn test_jump_then_play_truncates() {
    let mut timeline = Timeline::replay(&[0, 4, 1, 5]).expect("Valid replay");
    assert_eq!(timeline.len(), 5);

    timeline.jump_to(2).unwrap();
    timeline.play_move(8).unwrap();

    assert_eq!(timeline.len(), 4);
    assert_eq!(timeline.current_move(), 3);
}

#[test]
fn test_truncation_from_every_move() {
    for m in 0..5 {
        let mut timeline = Timeline::replay(&[0, 4, 1, 5]).expect("Valid replay");
        timeline.jump_to(m).unwrap();
        let free = Position::valid_moves(timeline.current_board())[0];
        timeline.play(free).unwrap();
        assert_eq!(timeline.len(), m + 2);
    }
}

#[test]
fn test_each_play_appends_one_changed_board() {
    let mut timeline = Timeline::new();
    for (ply, index) in [4, 0, 8, 2, 6].into_iter().enumerate() {
        let before = timeline.boards().to_vec();
        timeline.play_move(index).unwrap();

        assert_eq!(&timeline.boards()[..before.len()], before.as_slice());
        let last = timeline.boards()[ply + 1];
        let prev = timeline.boards()[ply];
        let changed = Position::ALL
            .iter()
            .filter(|p| last.get(**p) != prev.get(**p))
            .count();
        assert_eq!(changed, 1);
    }
}

#[test]
fn test_occupied_square_is_noop() {
    let mut timeline = Timeline::replay(&[4]).expect("Valid replay");
    let before = timeline.clone();

    let result = timeline.play_move(4);

    assert_eq!(result, Err(MoveError::SquareOccupied(Position::Center)));
    assert_eq!(timeline, before);
}

#[test]
fn test_any_click_after_win_is_noop() {
    let mut timeline = Timeline::replay(&[0, 4, 1, 5, 2]).expect("Valid replay");
    let before = timeline.clone();

    for index in 0..9 {
        let result = timeline.play_move(index);
        assert_eq!(result, Err(MoveError::GameOver));
    }
    assert_eq!(timeline, before);
}

#[test]
fn test_won_board_in_past_accepts_moves_after_jump() {
    let mut timeline = Timeline::replay(&[0, 4, 1, 5, 2]).expect("Valid replay");
    timeline.jump_to(4).unwrap();

    assert_eq!(timeline.status(), GameStatus::InProgress(Player::X));
    timeline.play_move(8).unwrap();
    assert_eq!(timeline.len(), 6);
    assert!(timeline.current_board().is_empty(Position::TopRight));
}

#[test]
fn test_jump_to_start_restores_empty_board() {
    let mut timeline = Timeline::replay(&[0, 4, 1]).expect("Valid replay");

    timeline.jump_to(0).unwrap();

    assert_eq!(timeline.current_board(), &Board::new());
    assert!(timeline.x_is_next());
    assert_eq!(timeline.status().to_string(), "Next player: X");
    assert_eq!(timeline.len(), 4);
}

#[test]
fn test_replay_stops_at_first_rejection() {
    let result = Timeline::replay(&[0, 0]);
    assert_eq!(result, Err(MoveError::SquareOccupied(Position::TopLeft)));
}

#[test]
fn test_marks_alternate() {
    let timeline = Timeline::replay(&[0, 1, 2]).expect("Valid replay");
    let board = timeline.current_board();

    assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
    assert_eq!(board.get(Position::TopCenter), Square::Occupied(Player::O));
    assert_eq!(board.get(Position::TopRight), Square::Occupied(Player::X));
    assert!(timeline.check_invariants().is_ok());
}

#[test]
fn test_snapshot_serializes() {
    let mut timeline = Timeline::replay(&[0, 4, 1, 5, 2]).expect("Valid replay");
    timeline.jump_to(5).unwrap();
    let snapshot = timeline.snapshot();

    assert!(snapshot.is_winning_cell(Position::TopCenter));
    assert!(!snapshot.is_winning_cell(Position::Center));

    let json = serde_json::to_value(&snapshot).expect("Serializable snapshot");
    assert_eq!(json["current_move"], 5);
    assert_eq!(json["status"]["Won"], "X");
    assert_eq!(json["entries"].as_array().map(Vec::len), Some(6));
}
