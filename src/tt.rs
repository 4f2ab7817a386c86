//! Transposition table for caching search results.
//!
//! Maps position fingerprints to the score found for that position. The
//! table is owned by a single search engine and cleared at the start of
//! every top-level search.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundType {
    Exact,      // Score is the exact value
    LowerBound, // Score is at least this value (failed high - score >= beta)
    UpperBound, // Score is at most this value (failed low - score <= alpha)
}

/// How the search uses the transposition table
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TableMode {
    /// Entries carry remaining depth and bound kind and are only reused
    /// when deep enough and compatible with the current window.
    #[default]
    Bounded,
    /// Any stored score for the same fingerprint is reused regardless of
    /// depth or window. Unsound: results can differ from plain minimax.
    PositionOnly,
    /// No caching
    Off,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TTEntry {
    pub score: i32,
    pub depth: u32,
    pub bound_type: BoundType,
}

impl TTEntry {
    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn bound_type(&self) -> BoundType {
        self.bound_type
    }

    /// Whether this entry decides a node searched to `depth` with window
    /// `(alpha, beta)`
    fn usable(&self, depth: u32, alpha: i32, beta: i32) -> bool {
        if self.depth < depth {
            return false;
        }
        match self.bound_type {
            BoundType::Exact => true,
            BoundType::LowerBound => self.score >= beta,
            BoundType::UpperBound => self.score <= alpha,
        }
    }
}

#[derive(Debug, Default)]
pub struct TranspositionTable {
    entries: HashMap<u64, TTEntry>,
}

impl TranspositionTable {
    #[must_use]
    pub fn new() -> Self {
        TranspositionTable {
            entries: HashMap::new(),
        }
    }

    /// Raw entry for `hash`, if any
    #[must_use]
    pub fn probe(&self, hash: u64) -> Option<TTEntry> {
        self.entries.get(&hash).copied()
    }

    /// Score usable for a node at `depth` with window `(alpha, beta)` under `mode`
    #[must_use]
    pub fn lookup(&self, mode: TableMode, hash: u64, depth: u32, alpha: i32, beta: i32) -> Option<i32> {
        let entry = self.probe(hash)?;
        match mode {
            TableMode::Bounded => entry.usable(depth, alpha, beta).then_some(entry.score),
            TableMode::PositionOnly => Some(entry.score),
            TableMode::Off => None,
        }
    }

    /// Store an entry. A deeper entry already present for the same
    /// fingerprint is kept.
    pub fn store(&mut self, hash: u64, depth: u32, score: i32, bound_type: BoundType) {
        let entry = TTEntry {
            score,
            depth,
            bound_type,
        };
        self.entries
            .entry(hash)
            .and_modify(|old| {
                if depth >= old.depth {
                    *old = entry;
                }
            })
            .or_insert(entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
