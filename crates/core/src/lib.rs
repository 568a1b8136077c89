use game::{Board, Color, Move};

pub mod eval;
pub mod game;
pub mod movegen;
mod notation;
pub mod renderer;

pub trait Engine {
    /// Picks a move for `side`, or `None` when the side has no moves.
    /// Check is not modeled, so "no moves" covers both stalemate-like and
    /// checkmate-like endings.
    fn choose_move(&self, board: &Board, side: Color) -> Option<Move>;
}
