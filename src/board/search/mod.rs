//! Search module implementing alpha-beta minimax with iterative deepening.
//!
//! Features:
//! - Iterative deepening with a wall-clock deadline and a stop flag
//! - Alpha-beta minimax (White maximizes, Black minimizes)
//! - Move ordering (previous best move, MVV-LVA, checks, killers, history, PST)
//! - Transposition table with depth and bound tracking

mod constants;
mod iterative;
mod limits;
mod minimax;
mod move_order;
mod tables;

use std::time::{Duration, Instant};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::tt::TableMode;

use super::{EvalWeights, Move, Position};
pub use constants::{INFINITY, MATE_THRESHOLD};
pub use limits::{SearchClock, SearchLimits};
use minimax::SearchContext;
pub use move_order::mvv_lva;
pub use tables::{HistoryTable, KillerTable, SearchTables};

/// Default search depth in plies
pub const DEFAULT_DEPTH: u32 = 4;

/// Search settings
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct SearchConfig {
    /// Deepest iteration to run
    pub max_depth: u32,
    /// Wall-clock budget per move. `None` searches to `max_depth`.
    pub time_limit: Option<Duration>,
    pub weights: EvalWeights,
    /// Alpha-beta cutoffs and transposition table. Off gives plain minimax.
    pub pruning: bool,
    /// Add the piece-square delta of each move to its ordering score
    pub positional_ordering: bool,
    pub tt_mode: TableMode,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_depth: DEFAULT_DEPTH,
            time_limit: None,
            weights: EvalWeights::default(),
            pruning: true,
            positional_ordering: true,
            tt_mode: TableMode::default(),
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub fn depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    #[must_use]
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    #[must_use]
    pub fn with_weights(mut self, weights: EvalWeights) -> Self {
        self.weights = weights;
        self
    }

    #[must_use]
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    #[must_use]
    pub fn with_positional_ordering(mut self, enabled: bool) -> Self {
        self.positional_ordering = enabled;
        self
    }

    #[must_use]
    pub fn tt_mode(mut self, mode: TableMode) -> Self {
        self.tt_mode = mode;
        self
    }
}

/// Counters for the current search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// `minimax` entries
    pub nodes: u64,
    pub tt_hits: u64,
    pub completed_depth: u32,
}

impl SearchStats {
    pub fn reset(&mut self) {
        *self = SearchStats::default();
    }
}

/// Outcome of a top-level search
#[derive(Clone, Copy, Debug)]
pub struct SearchResult {
    /// `None` only when the side to move has no legal move
    pub best_move: Option<Move>,
    /// White-positive score of the best move at `depth`
    pub score: i32,
    /// Deepest completed iteration; 0 when no search was needed
    pub depth: u32,
    pub nodes: u64,
    pub tt_hits: u64,
    pub elapsed: Duration,
}

/// Single-threaded alpha-beta searcher.
///
/// Owns its transposition, killer and history tables. They are reset at
/// the start of every [`SearchEngine::search`] call and never shared.
#[derive(Debug)]
pub struct SearchEngine {
    config: SearchConfig,
    tables: SearchTables,
    stats: SearchStats,
    limits: SearchLimits,
}

impl Default for SearchEngine {
    fn default() -> Self {
        SearchEngine::new(SearchConfig::default())
    }
}

impl SearchEngine {
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        SearchEngine::with_limits(config, SearchLimits::default())
    }

    /// Engine whose deadline and stop flag are shared with a driver
    #[must_use]
    pub fn with_limits(config: SearchConfig, limits: SearchLimits) -> Self {
        SearchEngine {
            config,
            tables: SearchTables::new(),
            stats: SearchStats::default(),
            limits,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    #[must_use]
    pub fn limits(&self) -> &SearchLimits {
        &self.limits
    }

    /// Counters from the last search
    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    #[must_use]
    pub fn tables(&self) -> &SearchTables {
        &self.tables
    }

    /// Search `pos` and report the chosen move with its telemetry.
    ///
    /// `pos` is left exactly as it was found. With a time limit configured
    /// the shared clock is restarted here; otherwise a deadline set by the
    /// driver is honored as is.
    ///
    /// Debug builds assert that `pos` holds exactly one king per color.
    pub fn search(&mut self, pos: &mut Position) -> SearchResult {
        debug_assert_eq!(pos.validate(), Ok(()), "searching an invalid position");
        let start = Instant::now();
        if let Some(limit) = self.config.time_limit {
            self.limits.clock.reset(start, Some(start + limit));
        }
        self.tables.new_search();
        self.stats.reset();

        let root_moves = pos.legal_moves();
        let mut result = SearchResult {
            best_move: None,
            score: 0,
            depth: 0,
            nodes: 0,
            tt_hits: 0,
            elapsed: Duration::ZERO,
        };

        match root_moves.len() {
            0 => {}
            1 => result.best_move = root_moves.first(),
            _ => {
                let mut ctx = SearchContext {
                    pos,
                    config: &self.config,
                    tables: &mut self.tables,
                    stats: &mut self.stats,
                    limits: &self.limits,
                    cancellable: false,
                };
                if let Some(best) = ctx.iterative_deepening(&root_moves) {
                    result.best_move = Some(best.mv);
                    result.score = best.score;
                    result.depth = best.depth;
                }
            }
        }

        result.nodes = self.stats.nodes;
        result.tt_hits = self.stats.tt_hits;
        result.elapsed = start.elapsed();
        result
    }

    /// Best move for the side to move, `None` when there is no legal move
    pub fn best_move(&mut self, pos: &mut Position) -> Option<Move> {
        self.search(pos).best_move
    }
}
