//! Core board types.
//!
//! - `Piece` and `Color` - piece kinds and sides
//! - `Square` - (row, col) coordinate on the 8x4 grid
//! - `SquareSet` - 32-bit set of squares
//! - `Move` and `MoveList` - move representation

mod bitboard;
mod moves;
mod piece;
mod square;

pub use bitboard::{SquareSet, SquareSetIter};
pub use moves::{Move, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece};
pub use square::{Square, COLS, NUM_SQUARES, ROWS};

pub(crate) use moves::ScoredMoveList;
