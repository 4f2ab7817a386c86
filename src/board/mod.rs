//! Board representation and game logic for 4x8 mini chess.
//!
//! Each side has four pawns, two knights, a bishop and a king on a board of
//! eight rows and four columns. Pawns only step forward and capture
//! diagonally; there is no promotion, castling or en passant.
//!
//! # Example
//! ```
//! use mini_chess::board::{Color, Position};
//!
//! let mut pos = Position::new();
//! let moves = pos.legal_moves();
//! assert_eq!(pos.side_to_move(), Color::White);
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod attack_tables;
mod attacks;
mod display;
pub(crate) mod error;
pub(crate) mod eval;
mod eval_terms;
mod layout;
mod make_unmake;
mod movegen;
pub mod prelude;
pub(crate) mod pst;
mod rules;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use error::{LayoutError, MoveParseError, PositionError, SearchAborted, SquareError};
pub use eval::{material_of, EvalWeights, MATE_SCORE};
pub use layout::INITIAL_LAYOUT;
pub use rules::GameState;
pub use state::{Grid, Position, PositionKey};
pub use types::{
    Color, Move, MoveList, MoveListIntoIter, Piece, Square, SquareSet, SquareSetIter, COLS,
    NUM_SQUARES, ROWS,
};

// Public API - search and configuration
pub use search::{
    SearchClock, SearchConfig, SearchEngine, SearchLimits, SearchResult, SearchStats,
    DEFAULT_DEPTH,
};

// Search internals for callers that want finer control
pub use search::{mvv_lva, HistoryTable, KillerTable, SearchTables, INFINITY, MATE_THRESHOLD};

pub(crate) use types::ScoredMoveList;
