//! Game rule tests through the crate-root driver functions.

use mini_chess::{
    apply, game_state, in_check, legal_moves, new_position, undo_last, Color, GameState, Piece,
    Position, Square,
};

#[test]
fn initial_position_moves() {
    let mut pos = new_position();
    let moves: Vec<String> = legal_moves(&mut pos).iter().map(|m| m.to_string()).collect();
    assert_eq!(moves, ["a2a3", "b2b3", "c2c3", "d2d3", "a1b3", "d1c3"]);
    assert_eq!(game_state(&mut pos), GameState::Ongoing);
    assert!(!in_check(&pos));
}

#[test]
fn initial_layout() {
    let pos = new_position();
    assert_eq!(pos.piece_at(Square(0, 2)), Some((Color::Black, Piece::King)));
    assert_eq!(pos.piece_at(Square(7, 2)), Some((Color::White, Piece::King)));
    assert_eq!(pos.piece_at(Square(7, 1)), Some((Color::White, Piece::Bishop)));
    assert_eq!(pos.piece_at(Square(1, 3)), Some((Color::Black, Piece::Pawn)));
    assert_eq!(pos.side_to_move(), Color::White);
    assert!(pos.validate().is_ok());
}

#[test]
fn apply_and_undo_round_trip() {
    let mut pos = new_position();
    let start = pos.clone();
    let start_hash = pos.hash();

    let mut played = Vec::new();
    for notation in ["d1c3", "a8b6", "c3d5", "b6d5"] {
        let mv = pos.parse_move(notation).unwrap();
        apply(&mut pos, mv);
        played.push(mv);
    }
    assert!(played[3].is_capture());

    while let Some(mv) = undo_last(&mut pos) {
        assert_eq!(Some(mv), played.pop());
    }
    assert_eq!(pos, start);
    assert_eq!(pos.hash(), start_hash);
    assert_eq!(undo_last(&mut pos), None);
}

#[test]
fn checkmate_and_stalemate_states() {
    let mut mate = Position::from_layout("k3/4/KN1B/4/4/4/4/4 b");
    assert!(in_check(&mate));
    assert!(legal_moves(&mut mate).is_empty());
    assert_eq!(game_state(&mut mate), GameState::Checkmate);

    let mut stale = Position::from_layout("k3/4/K2B/4/4/4/4/4 b");
    assert!(!in_check(&stale));
    assert!(legal_moves(&mut stale).is_empty());
    assert_eq!(game_state(&mut stale), GameState::Stalemate);
}

#[test]
fn check_must_be_answered() {
    // Black knight on b3 checks the king on a1
    let mut pos = Position::from_layout("1k2/4/4/4/4/1n2/4/K3 w");
    assert!(in_check(&pos));
    for mv in legal_moves(&mut pos) {
        apply(&mut pos, mv);
        assert!(!pos.king_in_danger(Color::White), "{mv}");
        undo_last(&mut pos);
    }
}

#[test]
fn repetition_counts_through_driver() {
    let mut pos = new_position();
    let start = pos.key();
    for _ in 0..2 {
        for notation in ["a1b3", "a8b6", "b3a1", "b6a8"] {
            let mv = pos.parse_move(notation).unwrap();
            apply(&mut pos, mv);
        }
    }
    assert_eq!(pos.occurrences(&start), 3);
    undo_last(&mut pos);
    assert_eq!(pos.occurrences(&start), 2);
}

#[test]
fn display_shows_grid() {
    let pos = new_position();
    let text = pos.to_string();
    assert!(text.contains('♔'));
    assert!(text.contains('♚'));
    assert!(text.contains("a   b   c   d"));
}
