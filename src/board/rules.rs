//! Terminal-state classification.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Position;

/// State of the game from the point of view of the side to move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameState {
    Ongoing,
    /// The side to move has no legal moves and is in check
    Checkmate,
    /// The side to move has no legal moves and is not in check
    Stalemate,
}

impl GameState {
    #[must_use]
    pub(crate) fn classify(has_moves: bool, in_check: bool) -> Self {
        match (has_moves, in_check) {
            (true, _) => GameState::Ongoing,
            (false, true) => GameState::Checkmate,
            (false, false) => GameState::Stalemate,
        }
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        self != GameState::Ongoing
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameState::Ongoing => write!(f, "ongoing"),
            GameState::Checkmate => write!(f, "checkmate"),
            GameState::Stalemate => write!(f, "stalemate"),
        }
    }
}

impl Position {
    /// Ongoing, checkmate or stalemate for the side to move.
    ///
    /// Debug builds assert that each color still has exactly one king.
    pub fn game_state(&mut self) -> GameState {
        debug_assert_eq!(self.validate(), Ok(()), "classifying an invalid position");
        let has_moves = !self.legal_moves().is_empty();
        GameState::classify(has_moves, self.is_in_check())
    }

    pub fn is_checkmate(&mut self) -> bool {
        self.game_state() == GameState::Checkmate
    }

    pub fn is_stalemate(&mut self) -> bool {
        self.game_state() == GameState::Stalemate
    }
}
