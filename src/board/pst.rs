//! Piece-square tables, indexed `[row][col]` from White's point of view.
//! Black looks up row `7 - row`.

use super::types::{Color, Piece, Square, COLS, ROWS};

type Table = [[i32; COLS]; ROWS];

pub(crate) const PAWN_PST: Table = [
    [5, 5, 5, 5],
    [10, 10, 10, 10],
    [20, 20, 20, 20],
    [30, 30, 30, 30],
    [30, 30, 30, 30],
    [20, 20, 20, 20],
    [10, 10, 10, 10],
    [5, 5, 5, 5],
];

pub(crate) const KNIGHT_PST: Table = [
    [-5, 0, 0, -5],
    [0, 5, 5, 0],
    [5, 10, 10, 5],
    [0, 10, 10, 0],
    [0, 10, 10, 0],
    [5, 10, 10, 5],
    [0, 5, 5, 0],
    [-5, 0, 0, -5],
];

pub(crate) const BISHOP_PST: Table = [
    [-2, -1, -1, -2],
    [-1, 0, 0, -1],
    [-1, 0, 0, -1],
    [-1, 0, 0, -1],
    [-1, 0, 0, -1],
    [-1, 0, 0, -1],
    [-1, 0, 0, -1],
    [-2, -1, -1, -2],
];

// Only used once the endgame starts.
pub(crate) const KING_ENDGAME_PST: Table = [
    [-30, -20, -20, -30],
    [-10, -10, 0, 0],
    [20, 20, 20, 20],
    [30, 30, 30, 30],
    [30, 30, 30, 30],
    [20, 20, 20, 20],
    [-10, -10, 0, 0],
    [-30, -20, -20, -30],
];

/// Positional bonus of `piece` on `sq` for its owner (unsigned).
///
/// Kings score 0 outside the endgame.
#[inline]
#[must_use]
pub(crate) fn pst_value(color: Color, piece: Piece, sq: Square, endgame: bool) -> i32 {
    let row = match color {
        Color::White => sq.row(),
        Color::Black => ROWS - 1 - sq.row(),
    };
    let table = match piece {
        Piece::Pawn => &PAWN_PST,
        Piece::Knight => &KNIGHT_PST,
        Piece::Bishop => &BISHOP_PST,
        Piece::King if endgame => &KING_ENDGAME_PST,
        Piece::King => return 0,
    };
    table[row][sq.col()]
}
