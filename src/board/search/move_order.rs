//! Move ordering for search.

use crate::board::pst::pst_value;
use crate::board::{Move, MoveList, ScoredMoveList};

use super::constants::{CAPTURE_WEIGHT, CHECK_BONUS, KILLER_BONUS, PV_MOVE_SCORE};
use super::minimax::SearchContext;

/// MVV-LVA: `victim * 10 - attacker`, 0 for quiet moves
#[inline]
#[must_use]
pub fn mvv_lva(mv: &Move) -> i32 {
    mv.piece_captured().map_or(0, |(_, victim)| {
        victim.value() * CAPTURE_WEIGHT - mv.piece_moved().1.value()
    })
}

impl SearchContext<'_> {
    /// Score every move and sort best first. Ties keep generation order.
    pub(super) fn order_moves(&mut self, moves: &MoveList, pv_move: Option<Move>) -> ScoredMoveList {
        let mut scored = ScoredMoveList::new();
        let positional = self.config.positional_ordering;
        let endgame = positional && self.pos.is_endgame();

        for &mv in moves {
            let mut score = mvv_lva(&mv);
            if self.pos.gives_check(mv) {
                score += CHECK_BONUS;
            }
            if self.tables.killer_moves.contains(&mv) {
                score += KILLER_BONUS;
            }
            score += self.tables.history.score(&mv);
            if positional {
                let (color, piece) = mv.piece_moved();
                score += pst_value(color, piece, mv.to(), endgame)
                    - pst_value(color, piece, mv.from(), endgame);
            }
            if pv_move == Some(mv) {
                score += PV_MOVE_SCORE;
            }
            scored.push(mv, score);
        }

        scored.sort_by_score_desc();
        scored
    }
}
