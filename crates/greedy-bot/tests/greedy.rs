#[cfg(test)]
mod greedy {
    use std::str::FromStr;

    use chess_rules_core::{
        game::{Board, Color, Move},
        Engine,
    };
    use greedy_bot::GreedyEngine;

    fn choose(placement: &str, side: Color) -> Option<Move> {
        GreedyEngine.choose_move(&Board::from_placement(placement).unwrap(), side)
    }

    #[test]
    fn white_grabs_the_hanging_queen() {
        let chosen = choose("3q4/8/8/8/8/8/8/3R4", Color::White);
        assert_eq!(chosen, Some(Move::from_str("d1d8").unwrap()));
    }

    #[test]
    fn black_minimizes() {
        let chosen = choose("3r4/8/8/8/8/8/8/3Q4", Color::Black);
        assert_eq!(chosen, Some(Move::from_str("d8d1").unwrap()));
    }

    #[test]
    fn prefers_the_bigger_capture() {
        // White rook on d4 can take a queen upward or a pawn leftward
        let chosen = choose("3q4/8/8/8/p2R4/8/8/8", Color::White);
        assert_eq!(chosen, Some(Move::from_str("d4d8").unwrap()));
    }

    #[test]
    fn equal_captures_break_ties_by_generation_order() {
        // Both black pawns are worth the same; the upward sliding
        // direction is enumerated first, so the d6 capture must win
        let chosen = choose("8/8/3p4/8/3R4/8/3p4/8", Color::White);
        assert_eq!(chosen, Some(Move::from_str("d4d6").unwrap()));
    }

    #[test]
    fn equal_captures_keep_the_first_scanned_square() {
        // Each rook can take a pawn of the same value; the a4 rook is
        // reached first by the row-major scan
        let chosen = choose("8/8/8/8/R6p/8/R6p/8", Color::White);
        assert_eq!(chosen, Some(Move::from_str("a4h4").unwrap()));
    }

    #[test]
    fn all_quiet_moves_keep_the_first_scanned() {
        // Every opening move scores zero, so the earliest-generated
        // candidate per the row-major scan is kept
        let board = Board::default();

        let white = GreedyEngine.choose_move(&board, Color::White);
        assert_eq!(white, Some(Move::from_str("a2a3").unwrap()));

        let black = GreedyEngine.choose_move(&board, Color::Black);
        assert_eq!(black, Some(Move::from_str("b8a6").unwrap()));
    }

    #[test]
    fn repeated_calls_are_deterministic() {
        let board = Board::from_placement("3q4/8/8/8/p2R4/2n5/8/5N2").unwrap();

        let first = GreedyEngine.choose_move(&board, Color::White);
        assert!(first.is_some());
        for _ in 0..10 {
            assert_eq!(GreedyEngine.choose_move(&board, Color::White), first);
        }
    }

    #[test]
    fn no_moves_yields_none() {
        // Black has no pieces at all
        assert_eq!(choose("8/8/8/8/8/8/8/K7", Color::Black), None);

        // Black's only pawn is stranded on its promotion row
        assert_eq!(choose("8/8/8/8/8/8/8/p6K", Color::Black), None);

        // Empty board, either side
        assert_eq!(choose("8/8/8/8/8/8/8/8", Color::White), None);
    }

    #[test]
    fn selection_leaves_the_board_untouched() {
        let board = Board::default();
        GreedyEngine.choose_move(&board, Color::White);

        assert_eq!(board.to_placement(), Board::INITIAL_PLACEMENT);
    }
}
