use chess_rules_core::{
    game::{Board, Color, Move},
    movegen::MoveGenDiagnostics,
    Engine,
};

/// One-ply greedy selector: applies every generated move, evaluates the
/// resulting board, and keeps the extremum for the moving side (maximum
/// for White, minimum for Black). Only a strict improvement replaces the
/// running best, so score ties go to the earliest-generated move.
pub struct GreedyEngine;

impl Engine for GreedyEngine {
    fn choose_move(&self, board: &Board, side: Color) -> Option<Move> {
        let mut best_move = None;
        let mut best_score = match side {
            Color::White => i32::MIN,
            Color::Black => i32::MAX,
        };

        for m in board.generate_moves(side, &mut MoveGenDiagnostics::default()) {
            let (next, _, _) = board.apply_move(m);
            let score = next.evaluate();

            let improved = match side {
                Color::White => score > best_score,
                Color::Black => score < best_score,
            };

            if improved {
                best_score = score;
                best_move = Some(m);
            }
        }

        best_move
    }
}
