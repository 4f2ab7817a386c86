use std::str::FromStr;

use super::error::{LayoutError, MoveParseError};
use super::{Color, Move, Piece, Position, Square, COLS, ROWS};

/// Layout string of the initial position
pub const INITIAL_LAYOUT: &str = "nbkn/pppp/4/4/4/4/PPPP/NBKN w";

impl Position {
    /// Parse a position from a layout string such as `nbkn/pppp/4/4/4/4/PPPP/NBKN w`.
    ///
    /// Rows are listed from row 0 (Black's back row) to row 7. Uppercase
    /// letters are White, lowercase Black, digits 1-4 are runs of empty cells.
    /// The board must hold exactly one king per color.
    pub fn try_from_layout(layout: &str) -> Result<Self, LayoutError> {
        let mut pos = Position::empty();
        let mut parts = layout.split_whitespace();
        let placement = parts.next().unwrap_or("");
        let side = parts.next().ok_or(LayoutError::MissingSideToMove)?;

        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != ROWS {
            return Err(LayoutError::WrongRowCount { found: rows.len() });
        }

        for (row, row_str) in rows.iter().enumerate() {
            let mut col = 0;
            for c in row_str.chars() {
                if let Some(run) = c.to_digit(10).filter(|d| (1..=COLS as u32).contains(d)) {
                    col += run as usize;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(LayoutError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                if col >= COLS {
                    return Err(LayoutError::WrongRowLength {
                        row,
                        cells: col + 1,
                    });
                }
                pos.set(Square(row, col), Some((color, piece)));
                col += 1;
            }
            if col != COLS {
                return Err(LayoutError::WrongRowLength { row, cells: col });
            }
        }

        pos.side_to_move = match side {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(LayoutError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        pos.validate()?;
        pos.reset_tracking();
        Ok(pos)
    }

    /// Parse a position from a layout string.
    ///
    /// # Panics
    /// Panics if the layout is invalid. Use `try_from_layout` for fallible parsing.
    #[must_use]
    pub fn from_layout(layout: &str) -> Self {
        Self::try_from_layout(layout).expect("Invalid layout string")
    }

    /// Canonical layout string of this position
    #[must_use]
    pub fn to_layout(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(ROWS);
        for row in 0..ROWS {
            let mut out = String::new();
            let mut empty = 0;
            for col in 0..COLS {
                if let Some((color, piece)) = self.piece_at(Square(row, col)) {
                    if empty > 0 {
                        out.push_str(&empty.to_string());
                        empty = 0;
                    }
                    out.push(piece.to_layout_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            rows.push(out);
        }

        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        format!("{} {}", rows.join("/"), active)
    }

    /// Parse a move in coordinate notation (e.g. "a2a3").
    ///
    /// Returns the matching legal move if found, or an error describing why parsing failed.
    ///
    /// # Example
    /// ```
    /// use mini_chess::board::Position;
    ///
    /// let mut pos = Position::new();
    /// let mv = pos.parse_move("a2a3").unwrap();
    /// assert_eq!(mv.to_string(), "a2a3");
    /// ```
    pub fn parse_move(&mut self, notation: &str) -> Result<Move, MoveParseError> {
        if notation.len() != 4 || !notation.is_ascii() {
            return Err(MoveParseError::InvalidLength {
                len: notation.chars().count(),
            });
        }

        let invalid_square = || MoveParseError::InvalidSquare {
            notation: notation.to_string(),
        };
        let from: Square = notation[..2].parse().map_err(|_| invalid_square())?;
        let to: Square = notation[2..].parse().map_err(|_| invalid_square())?;

        self.legal_moves()
            .into_iter()
            .find(|m| m.from() == from && m.to() == to)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: notation.to_string(),
            })
    }

    /// Parse a move and make it in one call.
    ///
    /// # Example
    /// ```
    /// use mini_chess::board::Position;
    ///
    /// let mut pos = Position::new();
    /// pos.play("a1b3").unwrap();
    /// pos.play("a7a6").unwrap();
    /// ```
    pub fn play(&mut self, notation: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_move(notation)?;
        self.make_move(mv);
        Ok(mv)
    }
}

impl FromStr for Position {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::try_from_layout(s)
    }
}
