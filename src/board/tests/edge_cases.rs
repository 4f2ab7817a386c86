//! Edge case tests: special positions, parsing and error reporting.

use crate::board::{
    Color, GameState, LayoutError, Move, MoveParseError, Piece, Position, PositionError, Square,
    INITIAL_LAYOUT,
};

#[test]
fn test_stalemate_position() {
    // Black king on a8 has no safe square and is not in check
    let mut pos = Position::from_layout("k3/4/K2B/4/4/4/4/4 b");
    assert!(!pos.is_in_check());
    assert!(pos.legal_moves().is_empty());
    assert_eq!(pos.game_state(), GameState::Stalemate);
    assert!(pos.is_stalemate());
    assert!(!pos.is_checkmate());
}

#[test]
fn test_checkmate_by_knight() {
    let mut pos = Position::from_layout("k3/4/KN1B/4/4/4/4/4 b");
    assert!(pos.is_in_check());
    assert_eq!(pos.game_state(), GameState::Checkmate);
    assert!(pos.game_state().is_terminal());
}

#[test]
fn test_single_escape_square() {
    let mut pos = Position::from_layout("k3/4/K3/4/4/4/4/4 b");
    let moves = pos.legal_moves();
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].to_string(), "a8b8");
    assert_eq!(pos.game_state(), GameState::Ongoing);
}

#[test]
fn test_missing_king_counts_as_attacked() {
    let mut pos = Position::empty();
    pos.set(Square(0, 0), Some((Color::Black, Piece::King)));
    pos.reset_tracking();

    assert_eq!(pos.find_king(Color::White), None);
    assert_eq!(
        pos.try_king(Color::White),
        Err(PositionError::MissingKing {
            color: Color::White
        })
    );
    assert!(pos.king_in_danger(Color::White));
    assert!(!pos.king_in_danger(Color::Black));
    assert_eq!(
        pos.validate(),
        Err(PositionError::MissingKing {
            color: Color::White
        })
    );
}

/// Knight on c3 takes the black king on b5. No legality check stops it.
fn position_after_king_capture() -> Position {
    let mut pos = Position::from_layout("4/4/4/1k2/4/2N1/4/3K w");
    let mv = pos.move_from(Square(5, 2), Square(3, 1)).unwrap();
    assert_eq!(mv.piece_captured(), Some((Color::Black, Piece::King)));
    pos.make_move(mv);
    pos
}

#[test]
fn test_king_capture_breaks_invariant() {
    let pos = position_after_king_capture();
    assert_eq!(
        pos.validate(),
        Err(PositionError::MissingKing {
            color: Color::Black
        })
    );
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "invalid position")]
fn test_game_state_fails_without_king() {
    position_after_king_capture().game_state();
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "invalid position")]
fn test_evaluate_fails_without_king() {
    position_after_king_capture().evaluate();
}

#[test]
fn test_attacks_by_each_piece() {
    let pos = Position::from_layout("k3/4/4/1p2/4/1n2/4/3K w");
    // Black pawn on b5 attacks a4 and c4
    assert!(pos.is_square_attacked(Square(4, 0), Color::Black));
    assert!(pos.is_square_attacked(Square(4, 2), Color::Black));
    assert!(!pos.is_square_attacked(Square(4, 1), Color::Black));
    // Black knight on b3 attacks d2 and a1
    assert!(pos.is_square_attacked(Square(6, 3), Color::Black));
    assert!(pos.is_square_attacked(Square(7, 0), Color::Black));
    // White king on d1 attacks c2
    assert!(pos.is_square_attacked(Square(6, 2), Color::White));

    let pos = Position::from_layout("k3/4/4/4/4/4/1P2/B2K w");
    // White pawn on b2 attacks a3 and c3; the bishop on a1 defends it
    assert!(pos.is_square_attacked(Square(5, 0), Color::White));
    assert!(pos.is_square_attacked(Square(5, 2), Color::White));
    assert!(pos.is_square_attacked(Square(6, 1), Color::White));
}

#[test]
fn test_layout_errors() {
    assert_eq!(
        Position::try_from_layout("nbkn/pppp/4/4/4/4/PPPP/NBKN"),
        Err(LayoutError::MissingSideToMove)
    );
    assert_eq!(
        Position::try_from_layout("nbkn/pppp/4/4/4/PPPP/NBKN w"),
        Err(LayoutError::WrongRowCount { found: 7 })
    );
    assert_eq!(
        Position::try_from_layout("nbkq/pppp/4/4/4/4/PPPP/NBKN w"),
        Err(LayoutError::InvalidPiece { char: 'q' })
    );
    assert!(matches!(
        Position::try_from_layout("nbkn/ppppp/4/4/4/4/PPPP/NBKN w"),
        Err(LayoutError::WrongRowLength { row: 1, .. })
    ));
    assert!(matches!(
        Position::try_from_layout("nbkn/pppp/4/4/4/4/PPPP/NBKN x"),
        Err(LayoutError::InvalidSideToMove { .. })
    ));
    assert_eq!(
        Position::try_from_layout("kk2/4/4/4/4/4/4/3K w"),
        Err(LayoutError::Position(PositionError::ExtraKing {
            color: Color::Black
        }))
    );
}

#[test]
fn test_initial_layout_round_trip() {
    let pos = Position::new();
    assert_eq!(pos.to_layout(), INITIAL_LAYOUT);
    assert_eq!(Position::from_layout(INITIAL_LAYOUT), pos);
    assert_eq!(Position::from_layout(INITIAL_LAYOUT).hash(), pos.hash());
}

#[test]
fn test_square_parsing() {
    use std::str::FromStr;

    assert_eq!(Square::from_str("a8").unwrap(), Square(0, 0));
    assert_eq!(Square::from_str("d1").unwrap(), Square(7, 3));
    assert_eq!(Square::from_str("b3").unwrap(), Square(5, 1));

    assert!(Square::from_str("e1").is_err());
    assert!(Square::from_str("a9").is_err());
    assert!(Square::from_str("a0").is_err());
    assert!(Square::from_str("").is_err());
    assert!(Square::from_str("a").is_err());
}

#[test]
fn test_square_try_from() {
    assert!(Square::try_from((0, 0)).is_ok());
    assert!(Square::try_from((7, 3)).is_ok());
    assert!(Square::try_from((8, 0)).is_err());
    assert!(Square::try_from((0, 4)).is_err());
}

#[test]
fn test_move_parse_errors() {
    let mut pos = Position::new();
    assert_eq!(
        pos.parse_move("a2a"),
        Err(MoveParseError::InvalidLength { len: 3 })
    );
    assert!(matches!(
        pos.parse_move("e2e4"),
        Err(MoveParseError::InvalidSquare { .. })
    ));
    assert!(matches!(
        pos.parse_move("a2a4"),
        Err(MoveParseError::IllegalMove { .. })
    ));
}

#[test]
fn test_move_equality_ignores_pieces() {
    let pos = Position::new();
    let mv = pos.move_from(Square(6, 0), Square(5, 0)).unwrap();
    let same = Move::new(
        Square(6, 0),
        Square(5, 0),
        (Color::Black, Piece::King),
        Some((Color::White, Piece::Bishop)),
    );
    assert_eq!(mv, same);
}

#[test]
fn test_movelist_index() {
    let mut pos = Position::new();
    let moves = pos.legal_moves();
    assert_eq!(moves[0], moves.first().unwrap());
    assert_eq!(moves.get(moves.len()), None);
}

#[test]
fn test_position_from_str() {
    let pos: Position = "k3/4/4/4/4/4/4/3K b".parse().unwrap();
    assert_eq!(pos.side_to_move(), Color::Black);

    let result: Result<Position, _> = "invalid layout".parse();
    assert!(result.is_err());
}
