use crate::game::{Board, Color, CoordOffsetTyp, Move, PieceKind, Square, BOARD_SIZE};

/// Counters for what a generation pass produced. Moves here are
/// pseudo-legal: consistent with the piece's movement pattern and basic
/// occupancy, with no check-safety filtering.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct MoveGenDiagnostics {
    pub captures: usize,
    pub sliding_moves: usize,
    pub pawn_moves: usize,
    pub offsetting_moves: usize,
}

impl Board {
    fn generate_sliding_moves(
        &self,
        pos: Square,
        diagnostics: &mut MoveGenDiagnostics,
    ) -> Vec<Move> {
        let Some(piece) = self[pos] else {
            return vec![];
        };

        const OFFSETS: [(CoordOffsetTyp, CoordOffsetTyp); 8] = [
            // Rook moves
            (-1, 0),
            (1, 0),
            (0, -1),
            (0, 1),
            // Bishop moves
            (-1, -1),
            (-1, 1),
            (1, -1),
            (1, 1),
        ];

        let piece_offsets = match piece.kind {
            PieceKind::Rook => &OFFSETS[0..4],
            PieceKind::Bishop => &OFFSETS[4..8],
            PieceKind::Queen => &OFFSETS[..],
            // Piece is not sliding
            _ => return vec![],
        };

        let mut moves = vec![];

        for &offset in piece_offsets {
            let mut current_pos = pos.add_offset(offset);

            while let Some(p) = current_pos {
                if self[p].is_none() {
                    moves.push(Move::new(pos, p));
                    current_pos = p.add_offset(offset);
                    continue;
                }

                if self.is_enemy_at(p, piece.color) {
                    moves.push(Move::new(pos, p));
                    diagnostics.captures += 1;
                }

                break;
            }
        }

        moves
    }

    fn generate_pawn_moves(&self, pos: Square, diagnostics: &mut MoveGenDiagnostics) -> Vec<Move> {
        let Some(piece) = self[pos] else {
            return vec![];
        };

        if piece.kind != PieceKind::Pawn {
            return vec![];
        }

        let forward = piece.color.forward();

        let mut moves = vec![];

        // Single square forward, onto an empty square only
        if let Some(step) = pos.add_offset((forward, 0)) {
            if self[step].is_none() {
                moves.push(Move::new(pos, step));

                // Double step from the starting row; the intermediate
                // square is already known to be empty here
                if pos.row == piece.color.pawn_start_row() {
                    if let Some(double) = pos.add_offset((forward * 2, 0)) {
                        if self[double].is_none() {
                            moves.push(Move::new(pos, double));
                        }
                    }
                }
            }
        }

        // Diagonal captures, enemy-occupied squares only
        for side in [-1, 1] {
            if let Some(dest) = pos.add_offset((forward, side)) {
                if self.is_enemy_at(dest, piece.color) {
                    moves.push(Move::new(pos, dest));
                    diagnostics.captures += 1;
                }
            }
        }

        moves
    }

    fn generate_offsetting_moves(
        &self,
        pos: Square,
        diagnostics: &mut MoveGenDiagnostics,
    ) -> Vec<Move> {
        let Some(piece) = self[pos] else {
            return vec![];
        };

        let offsets: [(CoordOffsetTyp, CoordOffsetTyp); 8] = match piece.kind {
            PieceKind::Knight => [
                (-2, -1),
                (-2, 1),
                (-1, -2),
                (-1, 2),
                (1, -2),
                (1, 2),
                (2, -1),
                (2, 1),
            ],
            PieceKind::King => [
                (-1, -1),
                (-1, 0),
                (-1, 1),
                (0, -1),
                (0, 1),
                (1, -1),
                (1, 0),
                (1, 1),
            ],
            // Piece is not king or knight
            _ => return vec![],
        };

        let mut moves = vec![];

        for offset in offsets {
            if let Some(dest) = pos.add_offset(offset) {
                if self[dest].is_none() {
                    moves.push(Move::new(pos, dest));
                } else if self.is_enemy_at(dest, piece.color) {
                    moves.push(Move::new(pos, dest));
                    diagnostics.captures += 1;
                }
            }
        }

        moves
    }

    /// Pseudo-legal moves for the piece on `pos`, in that piece type's
    /// enumeration order. An empty square yields no moves.
    pub fn generate_moves_at(&self, pos: Square, diagnostics: &mut MoveGenDiagnostics) -> Vec<Move> {
        let Some(piece) = self[pos] else {
            return vec![];
        };

        match piece.kind {
            PieceKind::Pawn => {
                let moves = self.generate_pawn_moves(pos, diagnostics);
                diagnostics.pawn_moves += moves.len();
                moves
            }
            PieceKind::Knight | PieceKind::King => {
                let moves = self.generate_offsetting_moves(pos, diagnostics);
                diagnostics.offsetting_moves += moves.len();
                moves
            }
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                let moves = self.generate_sliding_moves(pos, diagnostics);
                diagnostics.sliding_moves += moves.len();
                moves
            }
        }
    }

    /// Every pseudo-legal move for `side`'s pieces, scanning squares in
    /// row-major order. The order is deterministic; greedy selection
    /// breaks score ties in favor of the earliest-generated move.
    pub fn generate_moves(&self, side: Color, diagnostics: &mut MoveGenDiagnostics) -> Vec<Move> {
        let mut moves = vec![];

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pos = Square::new(row, col);
                if self.color_at(pos) != Some(side) {
                    continue;
                }

                moves.extend(self.generate_moves_at(pos, diagnostics));
            }
        }

        moves
    }
}
