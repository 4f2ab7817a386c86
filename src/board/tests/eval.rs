//! Evaluation tests.
//!
//! Terminal scoring, weights and color symmetry of the full evaluation.

use crate::board::{material_of, Color, EvalWeights, GameState, Position, MATE_SCORE};

const SAMPLE_LAYOUTS: [&str; 6] = [
    "nbkn/pppp/4/4/4/4/PPPP/NBKN w",
    "nbkn/pppp/4/4/4/4/PPPP/NBKN b",
    "n1kn/pp1p/2p1/1b2/4/1NP1/PP1P/1BKN w",
    "k3/4/4/2b1/4/1N2/4/3K w",
    "k3/2p1/4/1P2/4/4/P3/3K b",
    "4/4/4/1k2/4/1K2/4/4 w",
];

#[test]
fn test_initial_position_is_balanced() {
    let mut pos = Position::new();
    assert_eq!(pos.evaluate(), 0);
}

#[test]
fn test_eval_material_advantage() {
    // Black is missing the b8 bishop
    let mut pos = Position::from_layout("n1kn/pppp/4/4/4/4/PPPP/NBKN w");
    let score = pos.evaluate();
    assert!(score > 50, "bishop advantage score={score}");
    assert_eq!(material_of(&pos, Color::White) - material_of(&pos, Color::Black), 70);
}

#[test]
fn test_eval_symmetry() {
    for layout in SAMPLE_LAYOUTS {
        let mut pos = Position::from_layout(layout);
        let mut mirror = pos.mirrored();
        assert_eq!(pos.evaluate(), -mirror.evaluate(), "{layout}");
    }
}

#[test]
fn test_eval_symmetry_material_only() {
    let weights = EvalWeights::material_only();
    for layout in SAMPLE_LAYOUTS {
        let mut pos = Position::from_layout(layout);
        let mut mirror = pos.mirrored();
        assert_eq!(
            pos.evaluate_with(&weights),
            -mirror.evaluate_with(&weights),
            "{layout}"
        );
    }
}

#[test]
fn test_checkmate_scores_mate() {
    // Black king on a8 mated by the knight on b6
    let mut pos = Position::from_layout("k3/4/KN1B/4/4/4/4/4 b");
    assert_eq!(pos.game_state(), GameState::Checkmate);
    assert_eq!(pos.evaluate(), MATE_SCORE);

    let mut mirror = pos.mirrored();
    assert_eq!(mirror.game_state(), GameState::Checkmate);
    assert_eq!(mirror.evaluate(), -MATE_SCORE);
}

#[test]
fn test_stalemate_scores_zero() {
    let mut pos = Position::from_layout("k3/4/K2B/4/4/4/4/4 b");
    assert_eq!(pos.game_state(), GameState::Stalemate);
    assert_eq!(pos.evaluate(), 0);
}

#[test]
fn test_material_only_weights() {
    let mut pos = Position::from_layout("k3/4/4/2b1/4/1N2/4/3K w");
    // Knight and bishop are worth the same
    assert_eq!(pos.evaluate_with(&EvalWeights::material_only()), 0);

    let mut pos = Position::from_layout("k3/4/4/4/4/1N2/4/3K w");
    assert_eq!(pos.evaluate_with(&EvalWeights::material_only()), 70);
}

#[test]
fn test_zero_weights_score_zero() {
    let weights = EvalWeights {
        material: 0,
        pst: 0,
        mobility: 0,
        king_safety: 0,
        pawn_structure: 0,
        center: 0,
    };
    let mut pos = Position::from_layout("n1kn/pp1p/2p1/1b2/4/1NP1/PP1P/1BKN w");
    assert_eq!(pos.evaluate_with(&weights), 0);
}

#[test]
fn test_evaluate_leaves_position_untouched() {
    let mut pos = Position::from_layout("n1kn/pp1p/2p1/1b2/4/1NP1/PP1P/1BKN w");
    pos.play("b3a5").unwrap();
    let before = pos.clone();
    let hash = pos.hash();
    pos.evaluate();
    assert_eq!(pos, before);
    assert_eq!(pos.hash(), hash);
    assert_eq!(pos.move_log().len(), 1);
    assert_eq!(pos.repetition_count(), 1);
}

#[test]
fn test_endgame_threshold() {
    assert!(!Position::new().is_endgame());
    assert!(Position::from_layout("k3/4/4/2b1/4/1N2/4/3K w").is_endgame());
}
