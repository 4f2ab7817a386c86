//! Console rendering of a position.

use std::fmt;

use super::{Position, Square, COLS, ROWS};

const FILES: &str = "     a   b   c   d";
const TOP: &str = "   ┌───┬───┬───┬───┐";
const MIDDLE: &str = "   ├───┼───┼───┼───┤";
const BOTTOM: &str = "   └───┴───┴───┴───┘";

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{FILES}")?;
        writeln!(f, "{TOP}")?;
        for row in 0..ROWS {
            let rank = ROWS - row;
            write!(f, " {rank} │")?;
            for col in 0..COLS {
                let symbol = self
                    .piece_at(Square(row, col))
                    .map_or(' ', |(color, piece)| piece.symbol(color));
                write!(f, " {symbol} │")?;
            }
            writeln!(f, " {rank}")?;
            if row < ROWS - 1 {
                writeln!(f, "{MIDDLE}")?;
            }
        }
        writeln!(f, "{BOTTOM}")?;
        write!(f, "{FILES}")
    }
}
