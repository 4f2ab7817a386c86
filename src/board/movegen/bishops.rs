use super::super::attack_tables::BISHOP_DIRECTIONS;
use super::super::{MoveList, Piece, Position, Square};

impl Position {
    /// Slide along each diagonal, stopping at the first occupied square
    /// (included when it holds an opposing piece).
    pub(crate) fn generate_bishop_moves(&self, from: Square, moves: &mut MoveList) {
        for (dr, dc) in BISHOP_DIRECTIONS {
            let mut cur = from;
            while let Some(to) = cur.offset(dr, dc) {
                self.push_if_target(from, to, Piece::Bishop, moves);
                if !self.is_empty(to) {
                    break;
                }
                cur = to;
            }
        }
    }
}
