use super::super::{Move, MoveList, Piece, Position, Square};

impl Position {
    /// Single step forward onto an empty square, then diagonal captures.
    /// A pawn on the far row has no moves.
    pub(crate) fn generate_pawn_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move;
        let dir = color.pawn_direction();

        if let Some(to) = from.offset(dir, 0) {
            if self.is_empty(to) {
                moves.push(Move::new(from, to, (color, Piece::Pawn), None));
            }
        }

        for dc in [-1, 1] {
            let Some(to) = from.offset(dir, dc) else {
                continue;
            };
            if let Some(target) = self.piece_at(to) {
                if target.0 != color {
                    moves.push(Move::new(from, to, (color, Piece::Pawn), Some(target)));
                }
            }
        }
    }
}
