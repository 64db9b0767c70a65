//! Property tests over random games from the opening position.

use proptest::prelude::*;

use board_rules::games::chess;
use board_rules::Board;

/// Alive pieces on the grid match the pieces the players own.
fn assert_consistent(board: &Board) {
    let owned: usize = board.players().iter().map(|p| p.piece_count()).sum();
    assert_eq!(board.pieces().count(), owned);
    for piece in board.pieces() {
        assert_eq!(board.piece_at(piece.location).map(|p| p.id), Some(piece.id));
        assert!(board.player(&piece.team).unwrap().owns(piece.id));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// No legal move ever leaves the mover's king attacked.
    #[test]
    fn test_random_games_never_expose_own_king(choices in prop::collection::vec(any::<usize>(), 1..40)) {
        let mut board = chess::standard_board().unwrap();

        for choice in choices {
            let team = board.current_player().team().to_string();
            let legal = board.all_legal_moves(&team).unwrap();
            if legal.is_empty() {
                break;
            }
            let mv = legal[choice % legal.len()];
            let pieces_before = board.pieces().count();

            let turn = board.move_piece(mv.start_location(), mv.end_location()).unwrap();

            prop_assert!(!board.in_check(&team).unwrap());
            prop_assert!(board.piece_at(mv.start_location()).is_none());
            prop_assert_eq!(board.piece_at(mv.end_location()).map(|p| p.team.as_str()), Some(team.as_str()));
            prop_assert_eq!(board.pieces().count(), pieces_before - turn.removed().len());
            assert_consistent(&board);
        }
    }

    /// Asking for legal moves never changes the board.
    #[test]
    fn test_legal_move_queries_are_pure(choices in prop::collection::vec(any::<usize>(), 0..20)) {
        let mut board = chess::standard_board().unwrap();
        for choice in choices {
            let team = board.current_player().team().to_string();
            let legal = board.all_legal_moves(&team).unwrap();
            if legal.is_empty() {
                break;
            }
            let mv = legal[choice % legal.len()];
            board.move_piece(mv.start_location(), mv.end_location()).unwrap();
        }

        let before = board.snapshot();
        for piece in board.pieces().map(|p| p.location).collect::<Vec<_>>() {
            board.legal_moves(piece).unwrap();
        }
        prop_assert_eq!(board.snapshot(), before);
    }
}
