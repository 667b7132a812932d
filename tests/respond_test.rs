//! Tests for checks and replies on caller-supplied boards.

use rand::SeedableRng;
use rand::rngs::mock::StepRng;
use rand_chacha::ChaCha8Rng;
use serde_json::json;
use tictactoe_engine::{EngineError, MoveError, NoLegalMoveError, ValidationError};
use tictactoe_service::{
    ErrorStatus, GameOutcome, Move, Player, Position, SessionError, Square, inspect, respond,
};

#[test]
fn test_reply_takes_first_empty_square_with_zero_rng() {
    let grid = json!([["X", "", ""], ["", "", ""], ["", "", ""]]);
    let mut rng = StepRng::new(0, 0);
    let reply = respond(&grid, "O", &mut rng).expect("reply");

    assert_eq!(*reply.reply(), Move::new(Player::O, Position::TopCenter));
    assert_eq!(reply.board().get(Position::TopCenter), Square::Occupied(Player::O));
    assert_eq!(reply.board().occupied(), 2);
    assert_eq!(*reply.outcome(), GameOutcome::Ongoing);
}

#[test]
fn test_reply_can_finish_the_game() {
    let grid = json!([["O", "O", ""], ["X", "X", "O"], ["X", "O", "X"]]);
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let reply = respond(&grid, "O", &mut rng).expect("reply");

    assert_eq!(reply.reply().position(), Position::TopRight);
    assert_eq!(*reply.outcome(), GameOutcome::Win(Player::O));
}

#[test]
fn test_reply_never_overwrites() {
    let grid = json!([["X", "O", "X"], ["", "O", ""], ["", "X", ""]]);
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    for _ in 0..20 {
        let reply = respond(&grid, "O", &mut rng).expect("reply");
        assert!(matches!(
            reply.reply().position(),
            Position::MiddleLeft | Position::MiddleRight | Position::BottomLeft | Position::BottomRight
        ));
        assert_eq!(reply.board().occupied(), 6);
    }
}

#[test]
fn test_reply_to_finished_board_is_rejected() {
    let mut rng = StepRng::new(0, 0);

    let won = json!([["X", "X", "X"], ["O", "O", ""], ["", "", ""]]);
    let err = respond(&won, "O", &mut rng).unwrap_err();
    assert_eq!(err, SessionError::from(MoveError::GameAlreadyOver(GameOutcome::Win(Player::X))));
    assert_eq!(err.status(), ErrorStatus::BadRequest);
    assert!(err.to_string().starts_with("Game is already over"));

    let full = json!([["X", "O", "X"], ["X", "O", "O"], ["O", "X", "X"]]);
    let err = respond(&full, "O", &mut rng).unwrap_err();
    assert_eq!(err, SessionError::from(MoveError::GameAlreadyOver(GameOutcome::Draw)));
    assert_ne!(err, SessionError::from(NoLegalMoveError));
}

#[test]
fn test_board_checked_before_player() {
    let mut rng = StepRng::new(0, 0);

    let err = respond(&json!([["", ""], ["", ""]]), "?", &mut rng).unwrap_err();
    assert_eq!(err, SessionError::Engine(EngineError::Validation(ValidationError::Shape)));

    let err = respond(&json!([["", "", ""], ["", "", ""], ["", "", ""]]), "o", &mut rng).unwrap_err();
    assert_eq!(
        err,
        SessionError::from(ValidationError::InvalidPlayer("o".to_string()))
    );
    assert_eq!(err.status(), ErrorStatus::BadRequest);
}

#[test]
fn test_inspect_reports_outcome_and_moves() {
    let report = inspect(&json!([["X", "", 0], ["", "O", ""], ["", "", ""]])).expect("valid");
    assert_eq!(*report.outcome(), GameOutcome::Ongoing);
    assert_eq!(report.legal_moves().len(), 7);
    assert!(!report.legal_moves().contains(&Position::Center));

    let draw = inspect(&json!([["X", "O", "X"], ["X", "O", "O"], ["O", "X", "X"]])).expect("valid");
    assert_eq!(*draw.outcome(), GameOutcome::Draw);
    assert!(draw.legal_moves().is_empty());
    assert!(draw.to_string().ends_with("Outcome: Draw"));
}

#[test]
fn test_inspect_rejects_bad_cells() {
    let err = inspect(&json!([["X", "", ""], ["", "Z", ""], ["", "", ""]])).unwrap_err();
    assert_eq!(err, SessionError::from(ValidationError::CellValue { row: 1, col: 1 }));
}
