//! Killer and history tables.

use crate::board::{Move, NUM_SQUARES};
use crate::tt::TranspositionTable;

use super::constants::{KILLER_DEPTHS, KILLER_SLOTS};

/// Moves that caused a cutoff, per remaining depth, oldest first
#[derive(Debug)]
pub struct KillerTable {
    slots: [Vec<Move>; KILLER_DEPTHS],
}

impl Default for KillerTable {
    fn default() -> Self {
        Self::new()
    }
}

impl KillerTable {
    #[must_use]
    pub fn new() -> Self {
        KillerTable {
            slots: std::array::from_fn(|_| Vec::with_capacity(KILLER_SLOTS + 1)),
        }
    }

    /// Killers stored at `depth`, oldest first
    #[must_use]
    pub fn at(&self, depth: u32) -> &[Move] {
        self.slots.get(depth as usize).map_or(&[], Vec::as_slice)
    }

    /// Record a cutoff move. Duplicates are ignored; a third move evicts
    /// the oldest. Depths past the table are not recorded.
    pub fn update(&mut self, depth: u32, mv: Move) {
        let Some(slot) = self.slots.get_mut(depth as usize) else {
            return;
        };
        if slot.contains(&mv) {
            return;
        }
        slot.push(mv);
        if slot.len() > KILLER_SLOTS {
            slot.remove(0);
        }
    }

    /// Whether `mv` is a killer at any depth
    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.slots.iter().any(|slot| slot.contains(mv))
    }

    pub fn reset(&mut self) {
        for slot in &mut self.slots {
            slot.clear();
        }
    }
}

/// Cutoff bonus per (start, end) pair
#[derive(Debug)]
pub struct HistoryTable {
    entries: [i32; NUM_SQUARES * NUM_SQUARES],
}

impl Default for HistoryTable {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryTable {
    #[must_use]
    pub fn new() -> Self {
        HistoryTable {
            entries: [0; NUM_SQUARES * NUM_SQUARES],
        }
    }

    #[must_use]
    pub fn score(&self, mv: &Move) -> i32 {
        self.entries[mv.pair_index()]
    }

    /// Update history score for a move that caused a cutoff
    pub fn update(&mut self, mv: &Move, depth: u32) {
        let bonus = (depth * depth) as i32;
        let entry = &mut self.entries[mv.pair_index()];
        *entry = entry.saturating_add(bonus);
    }

    /// Halve every entry
    pub fn decay(&mut self) {
        for entry in &mut self.entries {
            *entry >>= 1;
        }
    }

    pub fn reset(&mut self) {
        self.entries = [0; NUM_SQUARES * NUM_SQUARES];
    }
}

/// Tables used during search (TT, killers, history)
#[derive(Debug, Default)]
pub struct SearchTables {
    pub tt: TranspositionTable,
    pub killer_moves: KillerTable,
    pub history: HistoryTable,
}

impl SearchTables {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepare for a new top-level search: clear the TT and killers, decay history
    pub fn new_search(&mut self) {
        self.tt.clear();
        self.killer_moves.reset();
        self.history.decay();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Position;

    fn moves() -> Vec<Move> {
        let mut pos = Position::new();
        pos.legal_moves().into_iter().collect()
    }

    #[test]
    fn test_killer_fifo_eviction() {
        let m = moves();
        let mut killers = KillerTable::new();
        killers.update(3, m[0]);
        killers.update(3, m[1]);
        killers.update(3, m[1]);
        assert_eq!(killers.at(3), &[m[0], m[1]]);
        killers.update(3, m[2]);
        assert_eq!(killers.at(3), &[m[1], m[2]]);
        assert!(killers.contains(&m[2]));
        assert!(!killers.contains(&m[0]));
    }

    #[test]
    fn test_killer_ignores_deep_slots() {
        let m = moves();
        let mut killers = KillerTable::new();
        killers.update(KILLER_DEPTHS as u32, m[0]);
        assert!(!killers.contains(&m[0]));
        assert!(killers.at(KILLER_DEPTHS as u32).is_empty());
    }

    #[test]
    fn test_history_bonus_and_decay() {
        let m = moves();
        let mut history = HistoryTable::new();
        history.update(&m[0], 3);
        history.update(&m[0], 2);
        assert_eq!(history.score(&m[0]), 13);
        history.decay();
        assert_eq!(history.score(&m[0]), 6);
        assert_eq!(history.score(&m[1]), 0);
    }

    #[test]
    fn test_new_search_resets_tables() {
        let m = moves();
        let mut tables = SearchTables::new();
        tables.tt.store(1, 1, 0, crate::tt::BoundType::Exact);
        tables.killer_moves.update(1, m[0]);
        tables.history.update(&m[0], 4);
        tables.new_search();
        assert!(tables.tt.is_empty());
        assert!(!tables.killer_moves.contains(&m[0]));
        assert_eq!(tables.history.score(&m[0]), 8);
    }
}
