//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Move generation and the legality filter
//! - `make_unmake.rs` - Make/undo move correctness
//! - `repetition.rs` - Position history and repetition counts
//! - `eval.rs` - Evaluation terms and color symmetry
//! - `search.rs` - Search engine behavior
//! - `edge_cases.rs` - Special positions and edge cases
//! - `proptest.rs` - Property-based tests

mod edge_cases;
mod eval;
mod make_unmake;

use super::{Move, Position};

/// Play a sequence of moves in coordinate notation, panicking on the first
/// illegal one
pub(super) fn play_all(pos: &mut Position, moves: &[&str]) -> Vec<Move> {
    moves
        .iter()
        .map(|m| pos.play(m).unwrap_or_else(|e| panic!("{m}: {e}")))
        .collect()
}

/// Legal moves as coordinate strings, in generation order
pub(super) fn move_strings(pos: &mut Position) -> Vec<String> {
    pos.legal_moves().iter().map(ToString::to_string).collect()
}
