//! Positional evaluation terms.
//!
//! - Mobility (legal move difference)
//! - King safety (early king walks, endgame centralization)
//! - Pawn structure (passed pawns, pawn chains)

mod king_safety;
mod mobility;
mod pawn_structure;
