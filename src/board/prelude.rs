//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use mini_chess::board::prelude::*;
//!
//! let mut pos = Position::new();
//! let best = SearchEngine::new(SearchConfig::default().depth(2)).best_move(&mut pos);
//! assert!(best.is_some());
//! ```

pub use super::{
    Color, EvalWeights, GameState, LayoutError, Move, MoveList, MoveParseError, Piece, Position,
    PositionError, SearchConfig, SearchEngine, SearchResult, Square, SquareError,
};
