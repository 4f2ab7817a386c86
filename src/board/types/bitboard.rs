//! Compact set of squares, one bit per square.

use super::square::{Square, NUM_SQUARES};

/// A 32-bit square set. Bit `i` is set when `Square::from_index(i)` is a member.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct SquareSet(pub u32);

impl SquareSet {
    pub const EMPTY: SquareSet = SquareSet(0);

    #[inline]
    #[must_use]
    pub const fn from_square(sq: Square) -> Self {
        SquareSet(1 << sq.as_index())
    }

    #[inline]
    pub fn insert(&mut self, sq: Square) {
        self.0 |= 1 << sq.as_index();
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, sq: Square) -> bool {
        self.0 & (1 << sq.as_index()) != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn popcount(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns an iterator over member squares in index order
    #[inline]
    #[must_use]
    pub fn iter(self) -> SquareSetIter {
        SquareSetIter(self)
    }
}

/// Iterator over squares in a `SquareSet`
pub struct SquareSetIter(SquareSet);

impl Iterator for SquareSetIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0.is_empty() {
            return None;
        }
        let idx = self.0 .0.trailing_zeros() as usize;
        self.0 .0 &= self.0 .0 - 1;
        debug_assert!(idx < NUM_SQUARES);
        Some(Square::from_index(idx))
    }
}
