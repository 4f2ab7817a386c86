//! Square attack detection and king lookup.

use super::attack_tables::{BISHOP_DIRECTIONS, KING_TARGETS, KNIGHT_TARGETS};
use super::error::PositionError;
use super::{Color, Piece, Position, Square};

impl Position {
    /// Whether any piece of color `by` attacks `sq`.
    ///
    /// Pawns attack diagonally forward, knights by leap, bishops along an
    /// unobstructed diagonal and kings on adjacent squares.
    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        self.attacked_by_pawn(sq, by)
            || self.attacked_by_leaper(sq, by, Piece::Knight)
            || self.attacked_by_bishop(sq, by)
            || self.attacked_by_leaper(sq, by, Piece::King)
    }

    fn attacked_by_pawn(&self, sq: Square, by: Color) -> bool {
        let back = -by.pawn_direction();
        [-1, 1].into_iter().any(|dc| {
            sq.offset(back, dc)
                .is_some_and(|from| self.piece_at(from) == Some((by, Piece::Pawn)))
        })
    }

    fn attacked_by_leaper(&self, sq: Square, by: Color, piece: Piece) -> bool {
        let table = match piece {
            Piece::Knight => &KNIGHT_TARGETS,
            _ => &KING_TARGETS,
        };
        table[sq.as_index()]
            .iter()
            .any(|from| self.piece_at(from) == Some((by, piece)))
    }

    fn attacked_by_bishop(&self, sq: Square, by: Color) -> bool {
        for (dr, dc) in BISHOP_DIRECTIONS {
            let mut cur = sq;
            while let Some(next) = cur.offset(dr, dc) {
                match self.piece_at(next) {
                    None => cur = next,
                    Some(occupant) => {
                        if occupant == (by, Piece::Bishop) {
                            return true;
                        }
                        break;
                    }
                }
            }
        }
        false
    }

    /// First king of `color` in scan order
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|&(_, c, p)| c == color && p == Piece::King)
            .map(|(sq, _, _)| sq)
    }

    /// Like `find_king`, but a missing king is an error
    pub fn try_king(&self, color: Color) -> Result<Square, PositionError> {
        self.find_king(color)
            .ok_or(PositionError::MissingKing { color })
    }

    /// Whether `color`'s king is attacked. A missing king counts as attacked.
    #[must_use]
    pub fn king_in_danger(&self, color: Color) -> bool {
        match self.find_king(color) {
            Some(king) => self.is_square_attacked(king, color.opponent()),
            None => true,
        }
    }

    /// True when the side to move has its king attacked
    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.king_in_danger(self.side_to_move)
    }
}
