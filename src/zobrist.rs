//! Zobrist hashing for positions.
//!
//! Provides incrementally-updatable 64-bit position fingerprints for the
//! transposition table.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Color, Piece, Square, NUM_SQUARES};

pub(crate) struct ZobristKeys {
    // piece_keys[piece][color][square_index]
    piece_keys: [[[u64; NUM_SQUARES]; 2]; 4],
    pub(crate) black_to_move_key: u64,
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(1234567890_u64);
        let mut piece_keys = [[[0; NUM_SQUARES]; 2]; 4];

        for piece in &mut piece_keys {
            for color in piece.iter_mut() {
                for key in color.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let black_to_move_key = rng.gen();

        ZobristKeys {
            piece_keys,
            black_to_move_key,
        }
    }

    #[inline]
    pub(crate) fn piece(&self, color: Color, piece: Piece, sq: Square) -> u64 {
        self.piece_keys[piece.index()][color.index()][sq.as_index()]
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);
