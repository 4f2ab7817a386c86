//! Pawn structure evaluation.

use crate::board::state::Position;
use crate::board::types::{Color, Piece, Square, COLS, ROWS};

const PASSED_PAWN_BASE: i32 = 15;
const PASSED_PAWN_PER_STEP: i32 = 5;
const CHAIN_BONUS: i32 = 5;

impl Position {
    /// No opposing pawn ahead on the same or an adjacent file
    #[must_use]
    pub fn is_passed_pawn(&self, sq: Square, color: Color) -> bool {
        let enemy = Some((color.opponent(), Piece::Pawn));
        let ahead = match color {
            Color::White => 0..sq.row(),
            Color::Black => sq.row() + 1..ROWS,
        };
        let lo = sq.col().saturating_sub(1);
        let hi = (sq.col() + 1).min(COLS - 1);

        for row in ahead {
            for col in lo..=hi {
                if self.piece_at(Square(row, col)) == enemy {
                    return false;
                }
            }
        }
        true
    }

    pub(crate) fn eval_pawn_structure(&self) -> i32 {
        self.eval_passed_pawns() + self.eval_pawn_chains()
    }

    /// `15 + 5 * advance` per passed pawn, advance counted from the start row
    pub(crate) fn eval_passed_pawns(&self) -> i32 {
        let mut score = 0;
        for (sq, color, piece) in self.pieces() {
            if piece != Piece::Pawn || !self.is_passed_pawn(sq, color) {
                continue;
            }
            let advance = match color {
                Color::White => 6 - sq.row() as i32,
                Color::Black => sq.row() as i32 - 1,
            };
            score += color.sign() * (PASSED_PAWN_BASE + PASSED_PAWN_PER_STEP * advance);
        }
        score
    }

    /// +5 per pawn defended diagonally by a friendly pawn
    pub(crate) fn eval_pawn_chains(&self) -> i32 {
        let mut score = 0;
        for (sq, color, piece) in self.pieces() {
            if piece != Piece::Pawn {
                continue;
            }
            let behind = -color.pawn_direction();
            let defended = [-1, 1].into_iter().any(|dc| {
                sq.offset(behind, dc)
                    .is_some_and(|s| self.piece_at(s) == Some((color, Piece::Pawn)))
            });
            if defended {
                score += color.sign() * CHAIN_BONUS;
            }
        }
        score
    }
}
