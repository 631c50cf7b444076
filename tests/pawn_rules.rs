mod common;

use chess_core::{piece_moves, Move, PieceType, Team};
use common::{board_with, destinations, sq};

#[test]
fn white_pawn_on_start_rank_can_advance_one_or_two() {
    let board = board_with(&[(sq(2, 5), Team::White, PieceType::Pawn)]);
    let moves = piece_moves(&board, sq(2, 5)).unwrap();
    assert_eq!(
        moves,
        vec![Move::new(sq(2, 5), sq(3, 5)), Move::new(sq(2, 5), sq(4, 5))]
    );
}

#[test]
fn black_pawn_on_start_rank_advances_toward_row_one() {
    let board = board_with(&[(sq(7, 4), Team::Black, PieceType::Pawn)]);
    let moves = piece_moves(&board, sq(7, 4)).unwrap();
    assert_eq!(
        moves,
        vec![Move::new(sq(7, 4), sq(6, 4)), Move::new(sq(7, 4), sq(5, 4))]
    );
}

#[test]
fn blocked_first_square_stops_both_advances() {
    for blocker in [Team::White, Team::Black] {
        let board = board_with(&[
            (sq(2, 5), Team::White, PieceType::Pawn),
            (sq(3, 5), blocker, PieceType::Knight),
        ]);
        assert!(piece_moves(&board, sq(2, 5)).unwrap().is_empty(), "{blocker:?}");
    }
}

#[test]
fn blocked_second_square_allows_single_advance_only() {
    let board = board_with(&[
        (sq(7, 2), Team::Black, PieceType::Pawn),
        (sq(5, 2), Team::White, PieceType::Pawn),
    ]);
    let moves = piece_moves(&board, sq(7, 2)).unwrap();
    assert_eq!(moves, vec![Move::new(sq(7, 2), sq(6, 2))]);
}

#[test]
fn double_advance_only_from_start_rank() {
    let board = board_with(&[
        (sq(3, 3), Team::White, PieceType::Pawn),
        (sq(6, 6), Team::Black, PieceType::Pawn),
    ]);
    assert_eq!(
        piece_moves(&board, sq(3, 3)).unwrap(),
        vec![Move::new(sq(3, 3), sq(4, 3))]
    );
    assert_eq!(
        piece_moves(&board, sq(6, 6)).unwrap(),
        vec![Move::new(sq(6, 6), sq(5, 6))]
    );
}

#[test]
fn captures_only_enemy_pieces_on_forward_diagonals() {
    let board = board_with(&[
        (sq(4, 4), Team::White, PieceType::Pawn),
        (sq(5, 3), Team::Black, PieceType::Rook),
        (sq(5, 5), Team::White, PieceType::Rook),
        // behind the pawn: never a capture target
        (sq(3, 3), Team::Black, PieceType::Rook),
        (sq(3, 5), Team::Black, PieceType::Rook),
    ]);
    let moves = piece_moves(&board, sq(4, 4)).unwrap();
    assert_eq!(
        moves,
        vec![Move::new(sq(4, 4), sq(5, 4)), Move::new(sq(4, 4), sq(5, 3))]
    );
}

#[test]
fn blocked_pawn_can_still_capture() {
    let board = board_with(&[
        (sq(5, 5), Team::Black, PieceType::Pawn),
        (sq(4, 5), Team::White, PieceType::Pawn),
        (sq(4, 4), Team::White, PieceType::Bishop),
        (sq(4, 6), Team::White, PieceType::Knight),
    ]);
    let moves = piece_moves(&board, sq(5, 5)).unwrap();
    assert_eq!(
        moves,
        vec![Move::new(sq(5, 5), sq(4, 4)), Move::new(sq(5, 5), sq(4, 6))]
    );
}

#[test]
fn captures_do_not_wrap_around_the_board_edge() {
    // Both pawns are blocked; the only enemy "diagonals" are across the board edge.
    let board = board_with(&[
        (sq(4, 1), Team::White, PieceType::Pawn),
        (sq(5, 8), Team::Black, PieceType::Queen),
        (sq(4, 8), Team::White, PieceType::Pawn),
        (sq(5, 1), Team::Black, PieceType::Queen),
    ]);
    assert!(piece_moves(&board, sq(4, 1)).unwrap().is_empty());
    assert!(piece_moves(&board, sq(4, 8)).unwrap().is_empty());
}

#[test]
fn edge_pawn_captures_inward() {
    let board = board_with(&[
        (sq(2, 8), Team::White, PieceType::Pawn),
        (sq(3, 7), Team::Black, PieceType::Knight),
    ]);
    let dests = destinations(&piece_moves(&board, sq(2, 8)).unwrap());
    assert_eq!(dests, [sq(3, 8), sq(4, 8), sq(3, 7)].into_iter().collect());
}

#[test]
fn advance_to_last_rank_yields_four_promotions() {
    let board = board_with(&[(sq(7, 1), Team::White, PieceType::Pawn)]);
    let moves = piece_moves(&board, sq(7, 1)).unwrap();
    let expected: Vec<Move> = PieceType::PROMOTIONS
        .iter()
        .map(|&k| Move::with_promotion(sq(7, 1), sq(8, 1), k))
        .collect();
    assert_eq!(moves, expected);
    assert_eq!(
        PieceType::PROMOTIONS,
        [PieceType::Queen, PieceType::Rook, PieceType::Bishop, PieceType::Knight]
    );
}

#[test]
fn black_promotes_on_row_one_including_captures() {
    let board = board_with(&[
        (sq(2, 5), Team::Black, PieceType::Pawn),
        (sq(1, 4), Team::White, PieceType::Rook),
        (sq(1, 6), Team::Black, PieceType::Rook),
    ]);
    let moves = piece_moves(&board, sq(2, 5)).unwrap();
    assert_eq!(moves.len(), 8);
    assert!(moves.iter().all(|m| m.is_promotion() && m.to.row() == 1));
    assert_eq!(moves.iter().filter(|m| m.to == sq(1, 5)).count(), 4);
    assert_eq!(moves.iter().filter(|m| m.to == sq(1, 4)).count(), 4);
    assert!(moves.iter().all(|m| m.promotion != Some(PieceType::King)));
    assert!(moves.iter().all(|m| m.promotion != Some(PieceType::Pawn)));
}

#[test]
fn blocked_promotion_square_with_capture() {
    let board = board_with(&[
        (sq(7, 4), Team::White, PieceType::Pawn),
        (sq(8, 4), Team::Black, PieceType::King),
        (sq(8, 5), Team::Black, PieceType::Bishop),
    ]);
    let moves = piece_moves(&board, sq(7, 4)).unwrap();
    assert_eq!(moves.len(), 4);
    assert!(moves.iter().all(|m| m.to == sq(8, 5) && m.is_promotion()));
}

#[test]
fn only_last_rank_moves_promote() {
    let board = board_with(&[(sq(6, 3), Team::White, PieceType::Pawn)]);
    let moves = piece_moves(&board, sq(6, 3)).unwrap();
    assert_eq!(moves, vec![Move::new(sq(6, 3), sq(7, 3))]);
}

#[test]
fn pawn_on_far_rank_has_no_moves() {
    let board = board_with(&[(sq(8, 2), Team::White, PieceType::Pawn)]);
    assert!(piece_moves(&board, sq(8, 2)).unwrap().is_empty());
}
