//! Alpha-beta minimax.
//!
//! White maximizes, Black minimizes. Scores are always White-positive.

use crate::board::error::SearchAborted;
use crate::board::eval::MATE_SCORE;
use crate::board::Position;
use crate::tt::{BoundType, TableMode};

use super::constants::{INFINITY, MATE_THRESHOLD};
use super::limits::SearchLimits;
use super::tables::SearchTables;
use super::{SearchConfig, SearchStats};

/// Search context for a single top-level search
pub(crate) struct SearchContext<'a> {
    pub pos: &'a mut Position,
    pub config: &'a SearchConfig,
    pub tables: &'a mut SearchTables,
    pub stats: &'a mut SearchStats,
    pub limits: &'a SearchLimits,
    /// Deadline and stop flag are only honored while this is set
    pub cancellable: bool,
}

/// Make a mate score relative to the node at `ply` before caching it
#[inline]
fn score_to_tt(score: i32, ply: u32) -> i32 {
    let ply = ply as i32;
    if score >= MATE_THRESHOLD {
        score + ply
    } else if score <= -MATE_THRESHOLD {
        score - ply
    } else {
        score
    }
}

#[inline]
fn score_from_tt(score: i32, ply: u32) -> i32 {
    let ply = ply as i32;
    if score >= MATE_THRESHOLD {
        score - ply
    } else if score <= -MATE_THRESHOLD {
        score + ply
    } else {
        score
    }
}

impl SearchContext<'_> {
    pub(super) fn check_abort(&self) -> Result<(), SearchAborted> {
        if self.cancellable && self.limits.should_stop() {
            Err(SearchAborted)
        } else {
            Ok(())
        }
    }

    fn uses_tt(&self) -> bool {
        self.config.pruning && self.config.tt_mode != TableMode::Off
    }

    /// Static evaluation, with mates scored by distance from the root so
    /// that faster mates are preferred
    pub(super) fn leaf_score(&mut self, ply: u32) -> i32 {
        let score = self.pos.static_eval(&self.config.weights);
        if score >= MATE_SCORE {
            score - ply as i32
        } else if score <= -MATE_SCORE {
            score + ply as i32
        } else {
            score
        }
    }

    /// Minimax value of the current position searched `depth` plies deep.
    ///
    /// `ply` is the distance from the root. Every move made here is undone
    /// before returning, including when the search is aborted.
    pub(super) fn minimax(
        &mut self,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        ply: u32,
    ) -> Result<i32, SearchAborted> {
        self.check_abort()?;
        self.stats.nodes += 1;

        if depth == 0 {
            return Ok(self.leaf_score(ply));
        }

        let use_tt = self.uses_tt();
        let hash = self.pos.hash();
        if use_tt {
            let hit = self.tables.tt.lookup(
                self.config.tt_mode,
                hash,
                depth,
                score_to_tt(alpha, ply),
                score_to_tt(beta, ply),
            );
            if let Some(score) = hit {
                self.stats.tt_hits += 1;
                return Ok(score_from_tt(score, ply));
            }
        }

        let moves = self.pos.legal_moves();
        if moves.is_empty() {
            let score = self.leaf_score(ply);
            if use_tt {
                self.tables
                    .tt
                    .store(hash, depth, score_to_tt(score, ply), BoundType::Exact);
            }
            return Ok(score);
        }

        let alpha_orig = alpha;
        let beta_orig = beta;
        let ordered = self.order_moves(&moves, None);
        let mut best = if maximizing { -INFINITY } else { INFINITY };

        for mv in ordered.moves() {
            self.check_abort()?;

            self.pos.make_move(mv);
            let result = self.minimax(depth - 1, alpha, beta, !maximizing, ply + 1);
            self.pos.undo_move();
            let score = result?;

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }

            if self.config.pruning && beta <= alpha {
                self.tables.killer_moves.update(depth, mv);
                self.tables.history.update(&mv, depth);
                break;
            }
        }

        if use_tt {
            let bound = if best <= alpha_orig {
                BoundType::UpperBound
            } else if best >= beta_orig {
                BoundType::LowerBound
            } else {
                BoundType::Exact
            };
            self.tables
                .tt
                .store(hash, depth, score_to_tt(best, ply), bound);
        }

        Ok(best)
    }
}
