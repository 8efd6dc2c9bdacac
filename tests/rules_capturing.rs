//! Capturing rules.
//!
//! Tests for mandatory capture, jump geometry, multi-jump chains, and the
//! win that follows a final capture.

use checkers_core::{Board, Game, GameStatus, MoveError, MoveKind, Player, Position, Square};

fn pos(row: u8, col: u8) -> Position {
    Position::new(row, col).unwrap()
}

#[test]
fn capture_removes_exactly_the_jumped_piece() {
    let mut board = Board::new();
    board.set(pos(2, 3), Square::Man(Player::Red));
    board.set(pos(3, 4), Square::Man(Player::Black));
    board.set(pos(7, 1), Square::Man(Player::Black));
    let mut game = Game::from_position(board, Player::Red);

    game.select(pos(2, 3));
    let applied = game.release(pos(4, 5)).expect("capture");

    assert_eq!(applied.kind, MoveKind::Capture { captured: pos(3, 4) });
    assert!(!applied.promoted);
    assert_eq!(game.square(pos(4, 5)), Square::Man(Player::Red));
    assert!(game.square(pos(2, 3)).is_empty());
    assert!(game.square(pos(3, 4)).is_empty());
    // The bystander is untouched.
    assert_eq!(game.square(pos(7, 1)), Square::Man(Player::Black));
}

#[test]
fn simple_move_is_illegal_while_any_capture_exists() {
    let mut board = Board::new();
    // Only the piece on (2, 3) can capture; (0, 1) has a plain step.
    board.set(pos(2, 3), Square::Man(Player::Red));
    board.set(pos(0, 1), Square::Man(Player::Red));
    board.set(pos(3, 4), Square::Man(Player::Black));
    let mut game = Game::from_position(board, Player::Red);

    assert!(game.must_jump());

    // The capturing piece may not sidestep.
    game.select(pos(2, 3));
    assert_eq!(game.release(pos(3, 2)), Err(MoveError::CaptureRequired));

    // Mandatory capture binds the whole side, not just the capturer.
    game.select(pos(0, 1));
    assert_eq!(game.release(pos(1, 0)), Err(MoveError::CaptureRequired));

    game.select(pos(2, 3));
    assert!(game.release(pos(4, 5)).is_ok());
}

#[test]
fn jump_over_empty_square_is_rejected() {
    let mut board = Board::new();
    board.set(pos(2, 3), Square::Man(Player::Red));
    board.set(pos(7, 7), Square::Man(Player::Black));
    let mut game = Game::from_position(board, Player::Red);

    game.select(pos(2, 3));
    assert_eq!(
        game.release(pos(4, 5)),
        Err(MoveError::NothingToCapture(pos(3, 4)))
    );
}

#[test]
fn jump_over_own_piece_is_rejected() {
    let mut board = Board::new();
    board.set(pos(2, 3), Square::Man(Player::Red));
    board.set(pos(3, 4), Square::Man(Player::Red));
    board.set(pos(7, 7), Square::Man(Player::Black));
    let mut game = Game::from_position(board, Player::Red);

    game.select(pos(2, 3));
    assert_eq!(
        game.release(pos(4, 5)),
        Err(MoveError::NothingToCapture(pos(3, 4)))
    );
}

#[test]
fn man_cannot_capture_backward() {
    let mut board = Board::new();
    board.set(pos(4, 3), Square::Man(Player::Red));
    board.set(pos(3, 2), Square::Man(Player::Black));
    let mut game = Game::from_position(board, Player::Red);

    game.select(pos(4, 3));
    assert!(matches!(
        game.release(pos(2, 1)),
        Err(MoveError::IllegalStep { .. })
    ));
}

#[test]
fn king_captures_backward() {
    let mut board = Board::new();
    board.set(pos(4, 3), Square::King(Player::Red));
    board.set(pos(3, 2), Square::Man(Player::Black));
    let mut game = Game::from_position(board, Player::Red);

    game.select(pos(4, 3));
    let applied = game.release(pos(2, 1)).expect("backward capture");
    assert_eq!(applied.kind, MoveKind::Capture { captured: pos(3, 2) });
    assert_eq!(game.square(pos(2, 1)), Square::King(Player::Red));
}

#[test]
fn a_king_can_be_captured_by_a_man() {
    let mut board = Board::new();
    board.set(pos(2, 3), Square::Man(Player::Red));
    board.set(pos(3, 4), Square::King(Player::Black));
    board.set(pos(7, 7), Square::Man(Player::Black));
    let mut game = Game::from_position(board, Player::Red);

    game.select(pos(2, 3));
    assert!(game.release(pos(4, 5)).is_ok());
    assert!(game.square(pos(3, 4)).is_empty());
}

#[test]
fn multi_jump_keeps_the_turn() {
    let mut board = Board::new();
    board.set(pos(2, 3), Square::Man(Player::Red));
    board.set(pos(0, 1), Square::Man(Player::Red));
    board.set(pos(3, 4), Square::Man(Player::Black));
    board.set(pos(5, 6), Square::Man(Player::Black));
    let mut game = Game::from_position(board, Player::Red);

    game.select(pos(2, 3));
    let first = game.release(pos(4, 5)).expect("first jump");
    assert!(!first.turn_passed);
    assert_eq!(game.current_player(), Player::Red);
    assert!(game.jump_pending());
    assert_eq!(game.pending_jump(), Some(pos(4, 5)));
    assert_eq!(game.chained_jumps(), 1);

    // Only the jumping piece may be picked up mid-chain.
    assert!(!game.select(pos(0, 1)));

    game.select(pos(4, 5));
    let second = game.release(pos(6, 7)).expect("second jump");
    assert!(second.turn_passed);
    assert_eq!(game.current_player(), Player::Black);
    assert!(!game.jump_pending());
    assert_eq!(game.chained_jumps(), 0);
    assert!(game.square(pos(3, 4)).is_empty());
    assert!(game.square(pos(5, 6)).is_empty());
    assert_eq!(game.square(pos(6, 7)), Square::Man(Player::Red));
}

#[test]
fn capture_near_the_edge_is_simply_unavailable() {
    let mut board = Board::new();
    // The landing square would be off the board; the engine must treat
    // this as no capture rather than reading past the edge.
    board.set(pos(5, 6), Square::Man(Player::Red));
    board.set(pos(6, 7), Square::Man(Player::Black));
    let mut game = Game::from_position(board, Player::Red);

    assert!(!game.must_jump());
    game.select(pos(5, 6));
    assert!(game.release(pos(6, 5)).is_ok());
}

#[test]
fn capturing_the_last_piece_wins() {
    let mut board = Board::new();
    board.set(pos(2, 3), Square::Man(Player::Red));
    board.set(pos(3, 4), Square::Man(Player::Black));
    let mut game = Game::from_position(board, Player::Red);

    game.select(pos(2, 3));
    let applied = game.release(pos(4, 5)).expect("final capture");

    assert!(applied.turn_passed);
    assert_eq!(game.status(), GameStatus::Won(Player::Red));
    assert_eq!(game.status().winner(), Some(Player::Red));
    assert_eq!(game.board().count(Player::Black), 0);
}

#[test]
fn mandatory_capture_enforced_through_replay() {
    // Red opens, black steps into range, red must then take the jump.
    let moves = [
        (pos(2, 2), pos(3, 3)),
        (pos(5, 1), pos(4, 2)),
        (pos(3, 3), pos(5, 1)),
    ];
    let game = Game::replay(&moves).expect("replay");

    assert_eq!(game.history().len(), 3);
    assert_eq!(
        game.history()[2].kind,
        MoveKind::Capture { captured: pos(4, 2) }
    );
    assert_eq!(game.board().count(Player::Black), 11);

    // The same position rejects the sidestep red would otherwise have.
    let mut game = Game::replay(&moves[..2]).expect("replay prefix");
    game.select(pos(3, 3));
    assert_eq!(game.release(pos(4, 4)), Err(MoveError::CaptureRequired));
}
