use crate::game::{Board, Color, PieceKind, Square, BOARD_SIZE};

impl PieceKind {
    /// Standard material value in centipawns. The king is worth nothing:
    /// its presence is neither guaranteed nor tracked.
    pub const fn material_value(self) -> i32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 0,
        }
    }
}

impl Board {
    /// Signed material sum over the whole board: White pieces count
    /// positive, Black pieces negative. No positional or mobility terms.
    pub fn evaluate(&self) -> i32 {
        let mut score = 0;

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let Some(piece) = self[Square::new(row, col)] else {
                    continue;
                };

                let value = piece.kind.material_value();
                score += match piece.color {
                    Color::White => value,
                    Color::Black => -value,
                };
            }
        }

        score
    }
}
