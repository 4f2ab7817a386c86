use std::collections::HashMap;

use super::error::PositionError;
use super::types::{Color, Move, Piece, Square, COLS, ROWS};

/// Board grid: `cells[row][col]`.
pub type Grid = [[Option<(Color, Piece)>; COLS]; ROWS];

/// Exact repetition key: the full board snapshot plus the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PositionKey {
    pub(crate) cells: Grid,
    pub(crate) side_to_move: Color,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RepetitionTable {
    counts: HashMap<PositionKey, u32>,
}

impl RepetitionTable {
    pub(crate) fn new() -> Self {
        RepetitionTable {
            counts: HashMap::new(),
        }
    }

    pub(crate) fn get(&self, key: &PositionKey) -> u32 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub(crate) fn set(&mut self, key: PositionKey, count: u32) {
        if count == 0 {
            self.counts.remove(&key);
        } else {
            self.counts.insert(key, count);
        }
    }

    pub(crate) fn increment(&mut self, key: PositionKey) -> u32 {
        let next = self.get(&key).saturating_add(1);
        self.set(key, next);
        next
    }

    /// Lower the count by one, removing the key when it reaches zero
    pub(crate) fn decrement(&mut self, key: PositionKey) -> u32 {
        let next = self.get(&key).saturating_sub(1);
        self.set(key, next);
        next
    }

    pub(crate) fn len(&self) -> usize {
        self.counts.len()
    }
}

/// A game position: the board, the side to move and everything needed to
/// undo moves.
#[derive(Clone, Debug)]
pub struct Position {
    pub(crate) cells: Grid,
    pub(crate) side_to_move: Color,
    pub(crate) move_log: Vec<Move>,
    pub(crate) history: RepetitionTable,
    pub(crate) hash: u64,
}

/// Back-row order from column 0 to 3.
const BACK_ROW: [Piece; COLS] = [Piece::Knight, Piece::Bishop, Piece::King, Piece::Knight];

impl Position {
    /// The fixed initial layout, White to move.
    pub fn new() -> Self {
        let mut pos = Position::empty();
        for (col, piece) in BACK_ROW.iter().enumerate() {
            pos.cells[Color::Black.back_row()][col] = Some((Color::Black, *piece));
            pos.cells[1][col] = Some((Color::Black, Piece::Pawn));
            pos.cells[6][col] = Some((Color::White, Piece::Pawn));
            pos.cells[Color::White.back_row()][col] = Some((Color::White, *piece));
        }
        pos.reset_tracking();
        pos
    }

    pub(crate) fn empty() -> Self {
        Position {
            cells: [[None; COLS]; ROWS],
            side_to_move: Color::White,
            move_log: Vec::new(),
            history: RepetitionTable::new(),
            hash: 0,
        }
    }

    /// Recompute the fingerprint and restart history after the board was set up
    pub(crate) fn reset_tracking(&mut self) {
        self.move_log.clear();
        self.hash = self.calculate_hash();
        self.history = RepetitionTable::new();
        self.history.set(self.key(), 1);
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Zobrist fingerprint of the current position
    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// Moves made so far, oldest first
    #[must_use]
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.move_log.last().copied()
    }

    /// Exact repetition key of the current position
    #[must_use]
    pub fn key(&self) -> PositionKey {
        PositionKey {
            cells: self.cells,
            side_to_move: self.side_to_move,
        }
    }

    /// How many times the current position has occurred
    #[must_use]
    pub fn repetition_count(&self) -> u32 {
        self.history.get(&self.key())
    }

    /// Occurrence count of an arbitrary key
    #[must_use]
    pub fn occurrences(&self, key: &PositionKey) -> u32 {
        self.history.get(key)
    }

    /// Number of distinct positions seen
    #[must_use]
    pub fn distinct_positions(&self) -> usize {
        self.history.len()
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.cells[sq.row()][sq.col()]
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    #[inline]
    pub(crate) fn set(&mut self, sq: Square, cell: Option<(Color, Piece)>) {
        self.cells[sq.row()][sq.col()] = cell;
    }

    /// All occupied squares in scan order (row 0..7, col 0..3)
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|(color, piece)| (sq, color, piece)))
    }

    /// Number of pieces other than kings, both sides
    #[must_use]
    pub fn non_king_count(&self) -> usize {
        self.pieces().filter(|(_, _, p)| *p != Piece::King).count()
    }

    /// Check that each color has exactly one king
    pub fn validate(&self) -> Result<(), PositionError> {
        for color in Color::BOTH {
            let kings = self
                .pieces()
                .filter(|&(_, c, p)| c == color && p == Piece::King)
                .count();
            match kings {
                0 => return Err(PositionError::MissingKing { color }),
                1 => {}
                _ => return Err(PositionError::ExtraKing { color }),
            }
        }
        Ok(())
    }

    /// Colour-swapped mirror image: rows flipped, colors swapped, side swapped.
    ///
    /// The mirror has a fresh move log and history.
    #[must_use]
    pub fn mirrored(&self) -> Position {
        let mut mirror = Position::empty();
        for (sq, color, piece) in self.pieces() {
            mirror.set(sq.flip_vertical(), Some((color.opponent(), piece)));
        }
        mirror.side_to_move = self.side_to_move.opponent();
        mirror.reset_tracking();
        mirror
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

impl PartialEq for Position {
    /// Positions are equal when board and side to move match
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells && self.side_to_move == other.side_to_move
    }
}

impl Eq for Position {}
