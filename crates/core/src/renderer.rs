use std::fmt::Display;

use crate::game::{Board, Square, BOARD_SIZE};

const ROW_SEPARATOR: &str = " +---+---+---+---+---+---+---+---+";

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..BOARD_SIZE {
            writeln!(f, "{ROW_SEPARATOR}")?;
            write!(f, " |")?;
            for col in 0..BOARD_SIZE {
                let cell = self[Square::new(row, col)].map_or(' ', |piece| piece.to_char());
                write!(f, " {cell} |")?;
            }
            writeln!(f, " {}", BOARD_SIZE - row)?;
        }

        writeln!(f, "{ROW_SEPARATOR}")?;
        writeln!(f, "   a   b   c   d   e   f   g   h")?;
        writeln!(f)?;
        writeln!(f, "Placement: {}", self.to_placement())?;

        Ok(())
    }
}
