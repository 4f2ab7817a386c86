//! King safety evaluation.
//!
//! Before the endgame a king that leaves its two home rows is penalized.
//! In the endgame kings are rewarded for walking to the center.

use crate::board::state::Position;
use crate::board::types::{Color, Square};

const EARLY_KING_PENALTY: i32 = 30;

/// `10 - 2 * (|r - 3.5| + |c - 1.5|)`, kept in integers
fn centralization(sq: Square) -> i32 {
    let r = 2 * sq.row() as i32 - 7;
    let c = 2 * sq.col() as i32 - 3;
    10 - (r.abs() + c.abs())
}

impl Position {
    pub(crate) fn eval_king_safety(&self, endgame: bool) -> i32 {
        let (Some(white), Some(black)) = (self.find_king(Color::White), self.find_king(Color::Black))
        else {
            return 0;
        };

        if endgame {
            return centralization(white) - centralization(black);
        }

        let mut score = 0;
        if white.row() < 6 {
            score -= EARLY_KING_PENALTY;
        }
        if black.row() > 1 {
            score += EARLY_KING_PENALTY;
        }
        score
    }
}
