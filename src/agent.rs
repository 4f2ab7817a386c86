//! Players that pick a move for the side to move.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::{
    mvv_lva, EvalWeights, Move, Position, SearchConfig, SearchEngine, INFINITY, MATE_SCORE,
};

/// Something that can play a move
pub trait Agent {
    /// Short display name
    fn name(&self) -> &str;

    /// Nominal search depth, 0 for agents that don't search
    fn depth(&self) -> u32;

    /// Choose a move for the side to move. `pos` is left as found.
    /// `None` means the agent has no move to offer.
    fn select_move(&mut self, pos: &mut Position) -> Option<Move>;

    /// Nodes visited by the last `select_move` call
    fn nodes_expanded(&self) -> u64;
}

/// Iterative-deepening alpha-beta player backed by a [`SearchEngine`]
#[derive(Debug)]
pub struct SearchAgent {
    engine: SearchEngine,
    nodes: u64,
}

impl SearchAgent {
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        SearchAgent {
            engine: SearchEngine::new(config),
            nodes: 0,
        }
    }

    #[must_use]
    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }
}

impl Agent for SearchAgent {
    fn name(&self) -> &str {
        "SearchAgent"
    }

    fn depth(&self) -> u32 {
        self.engine.config().max_depth
    }

    fn select_move(&mut self, pos: &mut Position) -> Option<Move> {
        let result = self.engine.search(pos);
        self.nodes = result.nodes;
        result.best_move
    }

    fn nodes_expanded(&self) -> u64 {
        self.nodes
    }
}

/// Fixed-depth negamax player without a transposition table.
///
/// Scores are taken from the side to move. Captures are tried first.
#[derive(Debug, Clone)]
pub struct NegamaxAgent {
    depth: u32,
    weights: EvalWeights,
    nodes: u64,
}

impl NegamaxAgent {
    pub const DEFAULT_DEPTH: u32 = 2;

    #[must_use]
    pub fn new(depth: u32) -> Self {
        NegamaxAgent {
            depth: depth.max(1),
            weights: EvalWeights::default(),
            nodes: 0,
        }
    }

    #[must_use]
    pub fn with_weights(mut self, weights: EvalWeights) -> Self {
        self.weights = weights;
        self
    }

    fn leaf(&self, pos: &mut Position, ply: i32) -> i32 {
        let score = pos.side_to_move().sign() * pos.static_eval(&self.weights);
        if score <= -MATE_SCORE {
            score + ply
        } else {
            score
        }
    }

    fn ordered(pos: &mut Position) -> Vec<Move> {
        let mut moves: Vec<Move> = pos.legal_moves().into_iter().collect();
        moves.sort_by_key(|mv| std::cmp::Reverse(mvv_lva(mv)));
        moves
    }

    fn negamax(&mut self, pos: &mut Position, depth: u32, mut alpha: i32, beta: i32, ply: i32) -> i32 {
        self.nodes += 1;
        if depth == 0 {
            return self.leaf(pos, ply);
        }

        let moves = Self::ordered(pos);
        if moves.is_empty() {
            return self.leaf(pos, ply);
        }

        let mut best = -INFINITY;
        for mv in moves {
            pos.make_move(mv);
            let score = -self.negamax(pos, depth - 1, -beta, -alpha, ply + 1);
            pos.undo_move();

            best = best.max(score);
            alpha = alpha.max(score);
            if alpha >= beta {
                break;
            }
        }
        best
    }
}

impl Default for NegamaxAgent {
    fn default() -> Self {
        NegamaxAgent::new(Self::DEFAULT_DEPTH)
    }
}

impl Agent for NegamaxAgent {
    fn name(&self) -> &str {
        "NegamaxAgent"
    }

    fn depth(&self) -> u32 {
        self.depth
    }

    fn select_move(&mut self, pos: &mut Position) -> Option<Move> {
        self.nodes = 0;
        let mut alpha = -INFINITY;
        let mut best: Option<Move> = None;

        for mv in Self::ordered(pos) {
            pos.make_move(mv);
            let score = -self.negamax(pos, self.depth - 1, -INFINITY, -alpha, 1);
            pos.undo_move();

            if best.is_none() || score > alpha {
                alpha = score;
                best = Some(mv);
            }
        }
        best
    }

    fn nodes_expanded(&self) -> u64 {
        self.nodes
    }
}

/// Plays a uniformly random legal move
#[derive(Debug, Clone)]
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    #[must_use]
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible move choices
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        RandomAgent::new()
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        "RandomAgent"
    }

    fn depth(&self) -> u32 {
        0
    }

    fn select_move(&mut self, pos: &mut Position) -> Option<Move> {
        pos.legal_moves().as_slice().choose(&mut self.rng).copied()
    }

    fn nodes_expanded(&self) -> u64 {
        1
    }
}

/// Agent names accepted on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgentKind {
    Search,
    Negamax,
    Random,
}

impl AgentKind {
    /// Build an agent. `depth` and `move_time` only apply to searching agents;
    /// `seed` only to the random one.
    #[must_use]
    pub fn build(self, depth: u32, move_time: Option<Duration>, seed: Option<u64>) -> Box<dyn Agent> {
        match self {
            AgentKind::Search => {
                let mut config = SearchConfig::default().depth(depth);
                if let Some(limit) = move_time {
                    config = config.with_time_limit(limit);
                }
                Box::new(SearchAgent::new(config))
            }
            AgentKind::Negamax => Box::new(NegamaxAgent::new(depth.min(NegamaxAgent::DEFAULT_DEPTH))),
            AgentKind::Random => Box::new(seed.map_or_else(RandomAgent::new, RandomAgent::seeded)),
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AgentKind::Search => "search",
            AgentKind::Negamax => "negamax",
            AgentKind::Random => "random",
        };
        f.write_str(name)
    }
}

/// Unknown agent name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAgent {
    pub name: String,
}

impl fmt::Display for UnknownAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown agent '{}', expected search, negamax or random",
            self.name
        )
    }
}

impl std::error::Error for UnknownAgent {}

impl FromStr for AgentKind {
    type Err = UnknownAgent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "search" | "alphabeta" => Ok(AgentKind::Search),
            "negamax" => Ok(AgentKind::Negamax),
            "random" => Ok(AgentKind::Random),
            _ => Err(UnknownAgent { name: s.to_string() }),
        }
    }
}
