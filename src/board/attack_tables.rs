use once_cell::sync::Lazy;

use super::types::{Square, SquareSet, NUM_SQUARES};

/// Knight leaps in generation order.
pub(crate) const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// King steps in generation order.
pub(crate) const KING_DELTAS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Bishop rays in generation order.
pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

fn leap_table(deltas: &[(isize, isize)]) -> [SquareSet; NUM_SQUARES] {
    let mut table = [SquareSet::EMPTY; NUM_SQUARES];
    for (idx, set) in table.iter_mut().enumerate() {
        let from = Square::from_index(idx);
        for &(dr, dc) in deltas {
            if let Some(to) = from.offset(dr, dc) {
                set.insert(to);
            }
        }
    }
    table
}

pub(crate) static KNIGHT_TARGETS: Lazy<[SquareSet; NUM_SQUARES]> =
    Lazy::new(|| leap_table(&KNIGHT_DELTAS));

pub(crate) static KING_TARGETS: Lazy<[SquareSet; NUM_SQUARES]> =
    Lazy::new(|| leap_table(&KING_DELTAS));
