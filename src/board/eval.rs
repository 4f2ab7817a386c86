//! Static evaluation, White-positive.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::pst::pst_value;
use super::{Color, Position, Square};

/// Score of a checkmate, before mate-distance adjustment by the search
pub const MATE_SCORE: i32 = 99_999;

/// Endgame starts when at most this many non-king pieces remain
pub(crate) const ENDGAME_PIECE_LIMIT: usize = 8;

const CENTER_SQUARES: [Square; 4] = [Square(3, 1), Square(3, 2), Square(4, 1), Square(4, 2)];
const CENTER_BONUS: i32 = 10;

/// Per-term multipliers for the evaluator. A weight of 0 disables a term.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EvalWeights {
    pub material: i32,
    pub pst: i32,
    pub mobility: i32,
    pub king_safety: i32,
    pub pawn_structure: i32,
    pub center: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        EvalWeights {
            material: 1,
            pst: 1,
            mobility: 1,
            king_safety: 1,
            pawn_structure: 1,
            center: 1,
        }
    }
}

impl EvalWeights {
    /// Only count material
    #[must_use]
    pub fn material_only() -> Self {
        EvalWeights {
            material: 1,
            pst: 0,
            mobility: 0,
            king_safety: 0,
            pawn_structure: 0,
            center: 0,
        }
    }
}

impl Position {
    /// Evaluate with default weights
    pub fn evaluate(&mut self) -> i32 {
        self.evaluate_with(&EvalWeights::default())
    }

    /// Evaluate from White's point of view. Checkmate scores `-MATE_SCORE`
    /// when White is mated, `MATE_SCORE` when Black is; stalemate is 0.
    ///
    /// Takes `&mut self` for legality checks; the position is left unchanged.
    /// Debug builds assert the one-king-per-color invariant.
    pub fn evaluate_with(&mut self, weights: &EvalWeights) -> i32 {
        debug_assert_eq!(self.validate(), Ok(()), "evaluating an invalid position");
        self.static_eval(weights)
    }

    /// `evaluate_with` without the invariant check, for search leaves
    pub(crate) fn static_eval(&mut self, weights: &EvalWeights) -> i32 {
        let mover_moves = self.legal_move_count() as i32;
        if mover_moves == 0 {
            return if !self.is_in_check() {
                0
            } else {
                -self.side_to_move.sign() * MATE_SCORE
            };
        }

        let endgame = self.is_endgame();
        let mut score = 0;

        if weights.material != 0 {
            score += weights.material * self.eval_material();
        }
        if weights.pst != 0 {
            score += weights.pst * self.eval_pst(endgame);
        }
        if weights.mobility != 0 {
            score += weights.mobility * self.eval_mobility(mover_moves);
        }
        if weights.king_safety != 0 {
            score += weights.king_safety * self.eval_king_safety(endgame);
        }
        if weights.pawn_structure != 0 {
            score += weights.pawn_structure * self.eval_pawn_structure();
        }
        if weights.center != 0 {
            score += weights.center * self.eval_center();
        }
        score
    }

    /// At most eight non-king pieces left on the board
    #[must_use]
    pub fn is_endgame(&self) -> bool {
        self.non_king_count() <= ENDGAME_PIECE_LIMIT
    }

    pub(crate) fn eval_material(&self) -> i32 {
        self.pieces()
            .map(|(_, color, piece)| color.sign() * piece.value())
            .sum()
    }

    pub(crate) fn eval_pst(&self, endgame: bool) -> i32 {
        self.pieces()
            .map(|(sq, color, piece)| color.sign() * pst_value(color, piece, sq, endgame))
            .sum()
    }

    pub(crate) fn eval_center(&self) -> i32 {
        CENTER_SQUARES
            .iter()
            .filter_map(|&sq| self.piece_at(sq))
            .map(|(color, _)| color.sign() * CENTER_BONUS)
            .sum()
    }
}

/// Material value of every piece `color` owns
#[must_use]
pub fn material_of(pos: &Position, color: Color) -> i32 {
    pos.pieces()
        .filter(|&(_, c, _)| c == color)
        .map(|(_, _, piece)| piece.value())
        .sum()
}
