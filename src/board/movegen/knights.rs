use super::super::attack_tables::KNIGHT_DELTAS;
use super::super::{MoveList, Piece, Position, Square};

impl Position {
    pub(crate) fn generate_knight_moves(&self, from: Square, moves: &mut MoveList) {
        for (dr, dc) in KNIGHT_DELTAS {
            if let Some(to) = from.offset(dr, dc) {
                self.push_if_target(from, to, Piece::Knight, moves);
            }
        }
    }
}
