//! Search constants.
//!
//! Contains the move-ordering bonuses and score bounds used by the search.

use crate::board::eval::MATE_SCORE;

// ============================================================================
// SCORE BOUNDS
// ============================================================================

/// Larger than any score the evaluator or search can produce
pub const INFINITY: i32 = 1_000_000;

/// Scores with absolute value >= this are checkmate scores
pub const MATE_THRESHOLD: i32 = MATE_SCORE - 1_000;

// ============================================================================
// MOVE ORDERING PRIORITIES
// ============================================================================
// Higher scores = tried earlier.

/// Previous iteration's best move at the root - highest priority
pub const PV_MOVE_SCORE: i32 = 1 << 20;

/// Victim value multiplier for MVV-LVA
pub const CAPTURE_WEIGHT: i32 = 10;

/// Move gives check
pub const CHECK_BONUS: i32 = 50;

/// Move is stored in the killer table at any depth
pub const KILLER_BONUS: i32 = 30;

// ============================================================================
// TABLE SIZES
// ============================================================================

/// Killer moves kept per depth
pub const KILLER_SLOTS: usize = 2;

/// Depths with a killer slot (remaining depth 0..10)
pub const KILLER_DEPTHS: usize = 10;
