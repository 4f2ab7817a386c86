use log::{debug, trace};

use crate::board::error::SearchAborted;
use crate::board::{Color, Move, MoveList};

use super::constants::{INFINITY, MATE_THRESHOLD};
use super::minimax::SearchContext;

/// Best move of the deepest completed pass
#[derive(Clone, Copy, Debug)]
pub(super) struct RootBest {
    pub mv: Move,
    pub score: i32,
    pub depth: u32,
}

impl SearchContext<'_> {
    /// One full-width pass over the root moves at `depth`.
    ///
    /// Returns the best move from the mover's point of view; the first move
    /// in search order wins ties.
    pub(super) fn search_root(
        &mut self,
        depth: u32,
        root_moves: &MoveList,
        pv_move: Option<Move>,
    ) -> Result<Option<(Move, i32)>, SearchAborted> {
        let maximizing = self.pos.side_to_move() == Color::White;
        let ordered = self.order_moves(root_moves, pv_move);
        let mut alpha = -INFINITY;
        let mut beta = INFINITY;
        let mut best: Option<(Move, i32)> = None;

        for mv in ordered.moves() {
            self.check_abort()?;

            self.pos.make_move(mv);
            let result = self.minimax(depth - 1, alpha, beta, !maximizing, 1);
            self.pos.undo_move();
            let score = result?;

            let improves = match best {
                None => true,
                Some((_, best_score)) if maximizing => score > best_score,
                Some((_, best_score)) => score < best_score,
            };
            if improves {
                best = Some((mv, score));
            }

            if maximizing {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }
            if self.config.pruning && beta <= alpha {
                break;
            }
        }

        Ok(best)
    }

    /// Search depth 1, 2, ... up to the configured maximum.
    ///
    /// Depth 1 always runs to completion. Deeper passes are abandoned as soon
    /// as the deadline passes or a stop is requested, and their partial
    /// results are discarded.
    pub(super) fn iterative_deepening(&mut self, root_moves: &MoveList) -> Option<RootBest> {
        let max_depth = self.config.max_depth.max(1);
        let mut best: Option<RootBest> = None;

        for depth in 1..=max_depth {
            if depth > 1 && self.limits.should_stop() {
                trace!("out of time before depth {depth}");
                break;
            }
            self.cancellable = depth > 1;

            match self.search_root(depth, root_moves, best.map(|b| b.mv)) {
                Ok(Some((mv, score))) => {
                    debug!(
                        "depth {depth} best {mv} score {score} nodes {} tt hits {}",
                        self.stats.nodes, self.stats.tt_hits
                    );
                    best = Some(RootBest { mv, score, depth });
                    self.stats.completed_depth = depth;
                    if score.abs() >= MATE_THRESHOLD {
                        break;
                    }
                }
                Ok(None) => break,
                Err(SearchAborted) => {
                    trace!("depth {depth} aborted after {} nodes", self.stats.nodes);
                    break;
                }
            }
        }

        self.cancellable = false;
        best
    }
}
