use super::super::attack_tables::KING_DELTAS;
use super::super::{MoveList, Piece, Position, Square};

impl Position {
    pub(crate) fn generate_king_moves(&self, from: Square, moves: &mut MoveList) {
        for (dr, dc) in KING_DELTAS {
            if let Some(to) = from.offset(dr, dc) {
                self.push_if_target(from, to, Piece::King, moves);
            }
        }
    }
}
