//! Error types for board operations.

use std::fmt;

use super::types::Color;

/// Violation of the one-king-per-color invariant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// No king of this color on the board
    MissingKing { color: Color },
    /// More than one king of this color on the board
    ExtraKing { color: Color },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::MissingKing { color } => {
                write!(f, "{color} king is missing from the board")
            }
            PositionError::ExtraKing { color } => {
                write!(f, "{color} has more than one king on the board")
            }
        }
    }
}

impl std::error::Error for PositionError {}

/// Error type for layout string parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Missing the side-to-move field
    MissingSideToMove,
    /// Wrong number of '/'-separated rows (must be 8)
    WrongRowCount { found: usize },
    /// Invalid piece character in a row
    InvalidPiece { char: char },
    /// A row describes more or fewer than 4 cells
    WrongRowLength { row: usize, cells: usize },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// The parsed board breaks the king invariant
    Position(PositionError),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::MissingSideToMove => write!(f, "Layout is missing the side to move"),
            LayoutError::WrongRowCount { found } => {
                write!(f, "Layout must have 8 rows, found {found}")
            }
            LayoutError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in layout")
            }
            LayoutError::WrongRowLength { row, cells } => {
                write!(f, "Row {row} describes {cells} cells, expected 4")
            }
            LayoutError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            LayoutError::Position(err) => write!(f, "Invalid position: {err}"),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LayoutError::Position(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PositionError> for LayoutError {
    fn from(err: PositionError) -> Self {
        LayoutError::Position(err)
    }
}

/// Error type for move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Move is not legal in the current position
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-3)
    ColOutOfBounds { col: usize },
    /// Invalid coordinate notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-3)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// A search ran past its deadline or was asked to stop.
///
/// Propagated through every recursive frame and caught by iterative
/// deepening; never returned to callers of the search API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchAborted;

impl fmt::Display for SearchAborted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Search aborted")
    }
}

impl std::error::Error for SearchAborted {}
