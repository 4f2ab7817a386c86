//! Mobility evaluation.

use crate::board::state::Position;
use crate::board::types::Color;

const MOBILITY_WEIGHT: i32 = 2;

impl Position {
    /// `(legal(White) - legal(Black)) * 2`.
    ///
    /// `mover_moves` is the legal move count of the side to move; the
    /// opponent is counted by passing the turn and restoring it.
    pub(crate) fn eval_mobility(&mut self, mover_moves: i32) -> i32 {
        self.flip_side();
        let opponent_moves = self.legal_move_count() as i32;
        self.flip_side();

        let diff = mover_moves - opponent_moves;
        match self.side_to_move {
            Color::White => diff * MOBILITY_WEIGHT,
            Color::Black => -diff * MOBILITY_WEIGHT,
        }
    }
}
