#[cfg(test)]
mod apply {
    use std::str::FromStr;

    use chess_rules_core::game::{Board, Color, Move, Piece, PieceKind, Square};

    fn apply(placement: &str, m: &str) -> (Board, Piece, Option<Piece>) {
        Board::from_placement(placement)
            .unwrap()
            .apply_move(Move::from_str(m).unwrap())
    }

    #[test]
    fn quiet_move_reports_no_capture() {
        let board = Board::default();
        let (next, moved, captured) = board.apply_move(Move::from_str("e2e4").unwrap());

        assert_eq!(moved, Piece::new(PieceKind::Pawn, Color::White));
        assert_eq!(captured, None);
        assert_eq!(next[Square::from_str("e2").unwrap()], None);
        assert_eq!(next[Square::from_str("e4").unwrap()], Some(moved));
    }

    #[test]
    fn input_board_is_untouched() {
        let board = Board::default();
        let (next, _, _) = board.apply_move(Move::from_str("e2e4").unwrap());

        assert_ne!(board, next);
        assert_eq!(board.to_placement(), Board::INITIAL_PLACEMENT);
    }

    #[test]
    fn capture_reports_the_victim() {
        let (next, moved, captured) = apply("3q4/8/8/8/8/8/8/3R4", "d1d8");

        assert_eq!(moved, Piece::new(PieceKind::Rook, Color::White));
        assert_eq!(captured, Some(Piece::new(PieceKind::Queen, Color::Black)));
        assert_eq!(next.to_placement(), "3R4/8/8/8/8/8/8/8");
    }

    #[test]
    fn white_pawn_promotes_to_queen() {
        let (next, moved, captured) = apply("8/P7/8/8/8/8/8/8", "a7a8");

        assert_eq!(moved, Piece::new(PieceKind::Pawn, Color::White));
        assert_eq!(captured, None);
        assert_eq!(next.to_placement(), "Q7/8/8/8/8/8/8/8");
    }

    #[test]
    fn black_pawn_promotes_to_queen() {
        let (next, _, _) = apply("8/8/8/8/8/8/7p/8", "h2h1");

        assert_eq!(next.to_placement(), "8/8/8/8/8/8/8/7q");
    }

    #[test]
    fn capturing_promotion() {
        let (next, _, captured) = apply("r7/1P6/8/8/8/8/8/8", "b7a8");

        assert_eq!(captured, Some(Piece::new(PieceKind::Rook, Color::Black)));
        assert_eq!(next.to_placement(), "Q7/8/8/8/8/8/8/8");
    }

    #[test]
    fn only_pawns_promote() {
        let (next, _, _) = apply("8/R7/8/8/8/8/8/8", "a7a8");

        assert_eq!(next.to_placement(), "R7/8/8/8/8/8/8/8");
    }

    #[test]
    #[should_panic(expected = "no piece on the move's source square")]
    fn empty_source_is_a_contract_violation() {
        Board::default().apply_move(Move::from_str("e4e5").unwrap());
    }
}
