use crate::zobrist::ZOBRIST;

use super::{Color, Move, Position, Square};

impl Position {
    /// Fingerprint computed from scratch; `hash()` must always equal this
    pub(crate) fn calculate_hash(&self) -> u64 {
        let mut hash: u64 = 0;

        for (sq, color, piece) in self.pieces() {
            hash ^= ZOBRIST.piece(color, piece, sq);
        }

        if self.side_to_move == Color::Black {
            hash ^= ZOBRIST.black_to_move_key;
        }

        hash
    }

    /// Create a move from `from` to `to`, freezing the pieces currently there.
    ///
    /// Returns `None` when `from` is empty. No legality check.
    #[must_use]
    pub fn move_from(&self, from: Square, to: Square) -> Option<Move> {
        let moved = self.piece_at(from)?;
        Some(Move::new(from, to, moved, self.piece_at(to)))
    }

    /// Apply `m`: move the piece, capture whatever is on the target, pass the
    /// turn and record the new position. No legality check.
    pub fn make_move(&mut self, m: Move) {
        debug_assert_eq!(
            self.piece_at(m.from()),
            Some(m.piece_moved()),
            "move {m} does not match the board"
        );

        let (color, piece) = m.piece_moved();
        let mut hash = self.hash;
        hash ^= ZOBRIST.black_to_move_key;
        hash ^= ZOBRIST.piece(color, piece, m.from());
        if let Some((c_color, c_piece)) = m.piece_captured() {
            hash ^= ZOBRIST.piece(c_color, c_piece, m.to());
        }
        hash ^= ZOBRIST.piece(color, piece, m.to());

        self.set(m.to(), Some(m.piece_moved()));
        self.set(m.from(), None);
        self.move_log.push(m);
        self.side_to_move = self.side_to_move.opponent();
        self.hash = hash;

        let key = self.key();
        self.history.increment(key);
    }

    /// Take back the last move. Returns `None` (and does nothing) when no
    /// move has been made.
    pub fn undo_move(&mut self) -> Option<Move> {
        let m = *self.move_log.last()?;

        let key = self.key();
        self.history.decrement(key);
        self.move_log.pop();

        let (color, piece) = m.piece_moved();
        let mut hash = self.hash;
        hash ^= ZOBRIST.piece(color, piece, m.to());
        if let Some((c_color, c_piece)) = m.piece_captured() {
            hash ^= ZOBRIST.piece(c_color, c_piece, m.to());
        }
        hash ^= ZOBRIST.piece(color, piece, m.from());
        hash ^= ZOBRIST.black_to_move_key;

        self.set(m.from(), Some(m.piece_moved()));
        self.set(m.to(), m.piece_captured());
        self.side_to_move = self.side_to_move.opponent();
        self.hash = hash;

        Some(m)
    }

    /// Pass the turn without moving. History is untouched; call again to
    /// restore. Used to count the opponent's mobility.
    pub(crate) fn flip_side(&mut self) {
        self.side_to_move = self.side_to_move.opponent();
        self.hash ^= ZOBRIST.black_to_move_key;
    }
}
