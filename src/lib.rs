//! 4x8 mini chess: rules, evaluation and alpha-beta search agents.
//!
//! The crate-root functions are the whole game-driver contract; see
//! [`board`] for the full engine API.
//!
//! ```
//! let mut pos = mini_chess::new_position();
//! let config = mini_chess::SearchConfig::default().depth(2);
//! let mv = mini_chess::select_move(&mut pos, &config).unwrap();
//! mini_chess::apply(&mut pos, mv);
//! assert_eq!(mini_chess::undo_last(&mut pos), Some(mv));
//! ```

pub mod agent;
pub mod board;
pub mod runner;
pub mod tt;
mod zobrist;

pub use board::{
    Color, EvalWeights, GameState, Move, MoveList, Piece, Position, SearchConfig, SearchEngine,
    SearchResult, Square,
};
pub use tt::{TableMode, TranspositionTable};

/// The fixed starting position, White to move
#[must_use]
pub fn new_position() -> Position {
    Position::new()
}

/// Legal moves for the side to move, in generation order
pub fn legal_moves(pos: &mut Position) -> MoveList {
    pos.legal_moves()
}

/// Play `mv`, which must come from `legal_moves` on this position
pub fn apply(pos: &mut Position, mv: Move) {
    pos.make_move(mv);
}

/// Take back the last move, `None` when nothing has been played
pub fn undo_last(pos: &mut Position) -> Option<Move> {
    pos.undo_move()
}

/// Ongoing, checkmate or stalemate for the side to move
pub fn game_state(pos: &mut Position) -> GameState {
    pos.game_state()
}

/// Whether the side to move is in check
#[must_use]
pub fn in_check(pos: &Position) -> bool {
    pos.is_in_check()
}

/// Search with a fresh engine and return its move
pub fn select_move(pos: &mut Position, config: &SearchConfig) -> Option<Move> {
    SearchEngine::new(config.clone()).best_move(pos)
}
