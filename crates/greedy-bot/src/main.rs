use chess_rules_core::{
    game::{Board, Color},
    Engine,
};
use greedy_bot::GreedyEngine;

const MAX_PLIES: usize = 120;

fn main() {
    let engine = GreedyEngine;
    let mut board = Board::default();
    let mut side = Color::White;

    for ply in 1..=MAX_PLIES {
        let Some(m) = engine.choose_move(&board, side) else {
            println!("{side:?} has no moves, game over");
            break;
        };

        let (next, moved, captured) = board.apply_move(m);
        match captured {
            Some(captured) => println!("{ply:3}. {side:?}: {m} ({moved} takes {captured})"),
            None => println!("{ply:3}. {side:?}: {m} ({moved})"),
        }

        board = next;
        side = side.opposite();
    }

    println!();
    println!("{board}");
    println!("Material: {}", board.evaluate());
}
