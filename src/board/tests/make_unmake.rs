//! Make/undo move tests.

use super::play_all;
use crate::board::{Color, Move, Piece, Position, Square};
use rand::prelude::*;

#[test]
fn test_quiet_move_make_undo() {
    let mut pos = Position::new();
    let original = pos.clone();
    let original_hash = pos.hash();

    let mv = pos.parse_move("a2a3").unwrap();
    pos.make_move(mv);
    assert_eq!(pos.side_to_move(), Color::Black);
    assert_eq!(pos.piece_at(Square(5, 0)), Some((Color::White, Piece::Pawn)));
    assert_eq!(pos.piece_at(Square(6, 0)), None);
    assert_eq!(pos.last_move(), Some(mv));

    assert_eq!(pos.undo_move(), Some(mv));
    assert_eq!(pos, original);
    assert_eq!(pos.hash(), original_hash);
    assert_eq!(pos.repetition_count(), 1);
    assert!(pos.move_log().is_empty());
}

#[test]
fn test_capture_make_undo() {
    let mut pos = Position::from_layout("k3/4/4/4/2p1/1P2/4/3K w");
    let original_hash = pos.hash();

    let mv = pos.parse_move("b3c4").unwrap();
    assert_eq!(mv.piece_captured(), Some((Color::Black, Piece::Pawn)));
    pos.make_move(mv);
    assert_eq!(pos.piece_at(Square(4, 2)), Some((Color::White, Piece::Pawn)));

    pos.undo_move();
    assert_eq!(pos.piece_at(Square(4, 2)), Some((Color::Black, Piece::Pawn)));
    assert_eq!(pos.piece_at(Square(5, 1)), Some((Color::White, Piece::Pawn)));
    assert_eq!(pos.hash(), original_hash);
}

#[test]
fn test_undo_with_empty_log_is_noop() {
    let mut pos = Position::new();
    let hash = pos.hash();
    assert_eq!(pos.undo_move(), None);
    assert_eq!(pos, Position::new());
    assert_eq!(pos.hash(), hash);
    assert_eq!(pos.repetition_count(), 1);
}

#[test]
fn test_move_from_empty_square() {
    let pos = Position::new();
    assert!(pos.move_from(Square(4, 0), Square(3, 0)).is_none());
    let mv = pos.move_from(Square(7, 0), Square(5, 1)).unwrap();
    assert_eq!(mv.piece_moved(), (Color::White, Piece::Knight));
    assert!(!mv.is_capture());
}

#[test]
fn test_undo_returns_moves_in_reverse_order() {
    let mut pos = Position::new();
    let played = play_all(&mut pos, &["a1b3", "d7d6", "b3c5", "d6c5"]);
    assert!(played[3].is_capture());

    for mv in played.iter().rev() {
        assert_eq!(pos.undo_move(), Some(*mv));
    }
    assert_eq!(pos, Position::new());
}

#[test]
fn test_legal_moves_stable_after_make_undo() {
    let mut pos = Position::new();
    let initial: Vec<Move> = pos.legal_moves().into_iter().collect();

    for &mv in &initial {
        pos.make_move(mv);
        pos.undo_move();
    }

    let after: Vec<Move> = pos.legal_moves().into_iter().collect();
    assert_eq!(initial, after);
}

#[test]
fn test_hash_matches_recompute_after_random_moves() {
    let mut pos = Position::new();
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let mut played = 0;

    for _ in 0..60 {
        let moves = pos.legal_moves();
        let Some(&mv) = moves.as_slice().choose(&mut rng) else {
            break;
        };
        pos.make_move(mv);
        played += 1;
        assert_eq!(pos.hash(), pos.calculate_hash());
    }

    for _ in 0..played {
        pos.undo_move();
        assert_eq!(pos.hash(), pos.calculate_hash());
    }
    assert_eq!(pos, Position::new());
}

#[test]
fn test_random_playout_round_trip_state() {
    let mut pos = Position::new();
    let initial_hash = pos.hash();
    let initial_key = pos.key();

    let mut rng = StdRng::seed_from_u64(0x5EED);
    for _ in 0..150 {
        let moves = pos.legal_moves();
        let Some(&mv) = moves.as_slice().choose(&mut rng) else {
            break;
        };
        pos.make_move(mv);
    }

    while pos.undo_move().is_some() {}

    assert_eq!(pos.hash(), initial_hash);
    assert_eq!(pos.key(), initial_key);
    assert_eq!(pos.repetition_count(), 1);
    assert_eq!(pos.distinct_positions(), 1);
}
