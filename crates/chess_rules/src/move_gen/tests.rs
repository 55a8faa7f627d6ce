//! Move generation tests
//!
//! Positions are built with [`BoardBuilder`] from (kind, color, square) lists.
//! Squares are flat indices: a8 = 0, h8 = 7, a1 = 56, h1 = 63.
//!
//! # Test Organization
//!
//! - `test_edge_*` - File wrapping on the flat index
//! - `test_knight_*`, `test_king_*` - Fixed offset pieces
//! - `test_sliding_*` - Bishop, rook, queen rays
//! - `test_pawn_*` - Pushes, jumps, captures, promotion, en passant
//! - `test_castle_*` - Castle availability and each condition removing it

use super::*;
use crate::board::{Board, BoardBuilder};

fn create_test_board(pieces: &[(PieceKind, Color, i8)], mover: Color) -> Board {
    let mut builder = BoardBuilder::new();
    for &(kind, color, pos) in pieces {
        builder.set_piece(Piece::new(kind, color, pos));
    }
    builder.set_move_maker(mover);
    builder.build().expect("test position is valid")
}

fn moves_from(board: &Board, pos: i8) -> Vec<Move> {
    let piece = *board.piece_at(pos).expect("piece on origin square");
    let mut moves = Vec::new();
    generate_pseudo_legal_moves(board.placement(), &piece, &mut moves);
    moves
}

fn destinations(moves: &[Move]) -> Vec<i8> {
    let mut out: Vec<i8> = moves.iter().map(Move::destination_coordinate).collect();
    out.sort_unstable();
    out
}

fn has_castle(board: &Board, king_side: bool) -> bool {
    board.current_player().legal_moves().iter().any(|mv| match mv {
        Move::KingSideCastle(_) => king_side,
        Move::QueenSideCastle(_) => !king_side,
        _ => false,
    })
}

const KINGS_OUT_OF_THE_WAY: [(PieceKind, Color, i8); 2] =
    [(PieceKind::King, Color::White, 57), (PieceKind::King, Color::Black, 1)];

fn with_kings(extra: &[(PieceKind, Color, i8)]) -> Vec<(PieceKind, Color, i8)> {
    let mut pieces = KINGS_OUT_OF_THE_WAY.to_vec();
    pieces.extend_from_slice(extra);
    pieces
}

// ============================================================================
// Edge Tests
// ============================================================================

#[test]
fn test_edge_exclusion_before_offset() {
    // h4 east would land on a3
    assert!(crosses_file_edge(39, E));
    assert!(crosses_file_edge(39, NE));
    assert!(crosses_file_edge(39, SE));
    assert!(!crosses_file_edge(39, W));
    // a5 west would land on h6
    assert!(crosses_file_edge(24, W));
    assert!(crosses_file_edge(24, NW));
    assert!(!crosses_file_edge(24, E));
    assert!(!crosses_file_edge(35, E));
    assert!(!crosses_file_edge(35, N));
}

#[test]
fn test_edge_rook_on_h_file_does_not_wrap() {
    let board = create_test_board(&with_kings(&[(PieceKind::Rook, Color::White, 39)]), Color::White);
    let moves = moves_from(&board, 39);

    assert_eq!(moves.len(), 14, "7 along the file, 7 along the rank");
    assert!(!destinations(&moves).contains(&40), "a3 is not reachable from h4");
}

// ============================================================================
// Knight and King Tests
// ============================================================================

#[test]
fn test_knight_corners_and_center() {
    let board = create_test_board(
        &with_kings(&[
            (PieceKind::Knight, Color::White, 56),
            (PieceKind::Knight, Color::White, 7),
            (PieceKind::Knight, Color::White, 35),
        ]),
        Color::White,
    );

    assert_eq!(destinations(&moves_from(&board, 56)), vec![41, 50], "a1: b3 and c2");
    assert_eq!(destinations(&moves_from(&board, 7)), vec![13, 22], "h8: f7 and g6");
    assert_eq!(moves_from(&board, 35).len(), 8, "d4 reaches all eight squares");
}

#[test]
fn test_knight_captures_enemy_not_friend() {
    let board = create_test_board(
        &with_kings(&[
            (PieceKind::Knight, Color::White, 35),
            (PieceKind::Pawn, Color::Black, 18),
            (PieceKind::Pawn, Color::White, 20),
        ]),
        Color::White,
    );
    let moves = moves_from(&board, 35);

    assert_eq!(moves.len(), 7);
    let capture = moves.iter().find(|mv| mv.destination_coordinate() == 18).expect("c6 capture");
    assert!(matches!(capture, Move::Attack { attacked, .. } if attacked.kind == PieceKind::Pawn));
    assert!(moves.iter().all(|mv| mv.destination_coordinate() != 20));
}

#[test]
fn test_king_on_edge() {
    let board = create_test_board(
        &[(PieceKind::King, Color::White, 31), (PieceKind::King, Color::Black, 0)],
        Color::White,
    );
    assert_eq!(destinations(&moves_from(&board, 31)), vec![22, 23, 30, 38, 39]);
}

// ============================================================================
// Sliding Piece Tests
// ============================================================================

#[test]
fn test_sliding_queen_open_board() {
    let board = create_test_board(&with_kings(&[(PieceKind::Queen, Color::White, 35)]), Color::White);
    assert_eq!(moves_from(&board, 35).len(), 27);
}

#[test]
fn test_sliding_bishop_stops_at_pieces() {
    // Bishop c1, friendly pawn d2, enemy pawn a3
    let board = create_test_board(
        &with_kings(&[
            (PieceKind::Bishop, Color::White, 58),
            (PieceKind::Pawn, Color::White, 51),
            (PieceKind::Pawn, Color::Black, 40),
        ]),
        Color::White,
    );
    let moves = moves_from(&board, 58);

    assert_eq!(destinations(&moves), vec![40, 49]);
    assert!(moves.iter().any(|mv| mv.is_attack() && mv.destination_coordinate() == 40));
}

#[test]
fn test_sliding_rook_capture_halts_ray() {
    // Rook a4 with an enemy knight on d4 and nothing beyond it reachable
    let board = create_test_board(
        &with_kings(&[(PieceKind::Rook, Color::White, 32), (PieceKind::Knight, Color::Black, 35)]),
        Color::White,
    );
    let along_rank: Vec<i8> = destinations(&moves_from(&board, 32)).into_iter().filter(|&d| d > 32 && d < 40).collect();

    assert_eq!(along_rank, vec![33, 34, 35]);
}

// ============================================================================
// Pawn Tests
// ============================================================================

#[test]
fn test_pawn_push_and_jump_from_start() {
    let board = Board::standard_starting_position();
    let moves = moves_from(&board, 52);

    assert_eq!(destinations(&moves), vec![36, 44]);
    assert!(moves.iter().any(|mv| matches!(mv, Move::PawnJump { destination: 36, .. })));
    assert!(moves.iter().any(|mv| matches!(mv, Move::PawnMove { destination: 44, .. })));
}

#[test]
fn test_pawn_jump_blocked() {
    // e3 blocked: neither push nor jump. b4 blocked: push only.
    let board = create_test_board(
        &with_kings(&[
            (PieceKind::Pawn, Color::White, 52),
            (PieceKind::Knight, Color::Black, 44),
            (PieceKind::Pawn, Color::White, 49),
            (PieceKind::Knight, Color::Black, 33),
        ]),
        Color::White,
    );

    assert!(moves_from(&board, 52).is_empty());
    assert_eq!(destinations(&moves_from(&board, 49)), vec![41]);
}

#[test]
fn test_pawn_jump_requires_first_move() {
    let mut builder = BoardBuilder::new();
    builder
        .set_piece(Piece::new(PieceKind::King, Color::White, 57))
        .set_piece(Piece::new(PieceKind::King, Color::Black, 1))
        .set_piece(Piece::with_first_move(PieceKind::Pawn, Color::White, 52, false))
        .set_move_maker(Color::White);
    let board = builder.build().expect("valid position");

    assert_eq!(destinations(&moves_from(&board, 52)), vec![44]);
}

#[test]
fn test_pawn_capture_does_not_wrap() {
    // Pawn a4 must not capture on h6
    let board = create_test_board(
        &with_kings(&[(PieceKind::Pawn, Color::White, 32), (PieceKind::Rook, Color::Black, 23)]),
        Color::White,
    );
    assert_eq!(destinations(&moves_from(&board, 32)), vec![24]);
}

#[test]
fn test_pawn_promotion_push_and_capture() {
    // Pawn c7, black rook on b8, c8 empty
    let board = create_test_board(
        &[
            (PieceKind::King, Color::White, 60),
            (PieceKind::King, Color::Black, 7),
            (PieceKind::Pawn, Color::White, 10),
            (PieceKind::Rook, Color::Black, 1),
        ],
        Color::White,
    );
    let moves = moves_from(&board, 10);

    assert_eq!(destinations(&moves), vec![1, 2]);
    assert!(moves.iter().all(Move::is_promotion));
    assert!(moves.iter().any(|mv| mv.is_attack() && mv.destination_coordinate() == 1));
}

#[test]
fn test_pawn_black_moves_down_the_board() {
    let board = Board::standard_starting_position();
    assert_eq!(destinations(&moves_from(&board, 12)), vec![20, 28]);
}

#[test]
fn test_pawn_en_passant_target() {
    // White just played e2-e4 past a black pawn on d4
    let pushed = Piece::with_first_move(PieceKind::Pawn, Color::White, 36, false);
    let mut builder = BoardBuilder::new();
    builder
        .set_piece(Piece::new(PieceKind::King, Color::White, 60))
        .set_piece(Piece::new(PieceKind::King, Color::Black, 4))
        .set_piece(Piece::with_first_move(PieceKind::Pawn, Color::Black, 35, false))
        .set_piece(pushed)
        .set_en_passant_pawn(pushed)
        .set_move_maker(Color::Black);
    let board = builder.build().expect("valid position");
    let moves = moves_from(&board, 35);

    let en_passant = moves
        .iter()
        .find(|mv| matches!(mv, Move::PawnEnPassantAttack { .. }))
        .expect("en passant available");
    assert_eq!(en_passant.destination_coordinate(), 44);
    assert_eq!(en_passant.attacked_piece(), Some(&pushed));
}

#[test]
fn test_pawn_en_passant_ignores_pawn_on_other_file() {
    let pushed = Piece::with_first_move(PieceKind::Pawn, Color::White, 38, false);
    let mut builder = BoardBuilder::new();
    builder
        .set_piece(Piece::new(PieceKind::King, Color::White, 60))
        .set_piece(Piece::new(PieceKind::King, Color::Black, 4))
        .set_piece(Piece::with_first_move(PieceKind::Pawn, Color::Black, 35, false))
        .set_piece(pushed)
        .set_en_passant_pawn(pushed)
        .set_move_maker(Color::Black);
    let board = builder.build().expect("valid position");

    assert!(moves_from(&board, 35).iter().all(|mv| !mv.is_attack()));
}

// ============================================================================
// Castle Tests
// ============================================================================

fn castle_setup(extra: &[(PieceKind, Color, i8)]) -> Vec<(PieceKind, Color, i8)> {
    let mut pieces = vec![
        (PieceKind::King, Color::White, 60),
        (PieceKind::Rook, Color::White, 63),
        (PieceKind::Rook, Color::White, 56),
        (PieceKind::King, Color::Black, 4),
    ];
    pieces.extend_from_slice(extra);
    pieces
}

#[test]
fn test_castle_both_sides_available() {
    let board = create_test_board(&castle_setup(&[]), Color::White);
    assert!(has_castle(&board, true));
    assert!(has_castle(&board, false));
}

#[test]
fn test_castle_blocked_by_piece_between() {
    let board = create_test_board(&castle_setup(&[(PieceKind::Knight, Color::White, 62)]), Color::White);
    assert!(!has_castle(&board, true));
    assert!(has_castle(&board, false));

    // b1 is not on the king's path but must still be empty
    let board = create_test_board(&castle_setup(&[(PieceKind::Knight, Color::White, 57)]), Color::White);
    assert!(!has_castle(&board, false));
}

#[test]
fn test_castle_removed_when_king_or_rook_moved() {
    let mut builder = BoardBuilder::new();
    builder
        .set_piece(Piece::with_first_move(PieceKind::King, Color::White, 60, false))
        .set_piece(Piece::new(PieceKind::Rook, Color::White, 63))
        .set_piece(Piece::new(PieceKind::Rook, Color::White, 56))
        .set_piece(Piece::new(PieceKind::King, Color::Black, 4))
        .set_move_maker(Color::White);
    let board = builder.build().expect("valid position");
    assert!(!has_castle(&board, true));
    assert!(!has_castle(&board, false));

    let mut builder = BoardBuilder::new();
    builder
        .set_piece(Piece::new(PieceKind::King, Color::White, 60))
        .set_piece(Piece::with_first_move(PieceKind::Rook, Color::White, 63, false))
        .set_piece(Piece::new(PieceKind::Rook, Color::White, 56))
        .set_piece(Piece::new(PieceKind::King, Color::Black, 4))
        .set_move_maker(Color::White);
    let board = builder.build().expect("valid position");
    assert!(!has_castle(&board, true));
    assert!(has_castle(&board, false));
}

#[test]
fn test_castle_removed_when_rook_missing() {
    let board = create_test_board(
        &[
            (PieceKind::King, Color::White, 60),
            (PieceKind::Rook, Color::White, 56),
            (PieceKind::King, Color::Black, 4),
        ],
        Color::White,
    );
    assert!(!has_castle(&board, true));
    assert!(has_castle(&board, false));
}

#[test]
fn test_castle_path_attacked() {
    // Black rook on f8 covers f1
    let board = create_test_board(&castle_setup(&[(PieceKind::Rook, Color::Black, 5)]), Color::White);
    assert!(!has_castle(&board, true));
    assert!(has_castle(&board, false));
}

#[test]
fn test_castle_pawn_guards_empty_square() {
    // Black pawn on g2 covers f1 and h1 without any capture being generated
    let board = create_test_board(&castle_setup(&[(PieceKind::Pawn, Color::Black, 54)]), Color::White);
    assert!(!has_castle(&board, true));
    assert!(has_castle(&board, false));
}

#[test]
fn test_castle_pawn_push_does_not_guard() {
    let pawn = Piece::with_first_move(PieceKind::Pawn, Color::Black, 53, false);
    let push = Move::PawnMove { piece: pawn, destination: 61 };
    assert!(!is_square_targeted(61, &[push], &[]));

    let rook = Piece::new(PieceKind::Rook, Color::Black, 5);
    let slide = Move::Basic { piece: rook, destination: 61 };
    assert!(is_square_targeted(61, &[slide], &[]));
}

#[test]
fn test_castle_queen_side_ignores_attacked_b1() {
    let board = create_test_board(&castle_setup(&[(PieceKind::Rook, Color::Black, 1)]), Color::White);
    assert!(has_castle(&board, false));
}

#[test]
fn test_castle_not_out_of_check() {
    let board = create_test_board(&castle_setup(&[(PieceKind::Rook, Color::Black, 28)]), Color::White);
    assert!(board.current_player().is_in_check());
    assert!(!has_castle(&board, true));
    assert!(!has_castle(&board, false));
}

#[test]
fn test_castle_black_both_sides() {
    let board = create_test_board(
        &[
            (PieceKind::King, Color::White, 60),
            (PieceKind::King, Color::Black, 4),
            (PieceKind::Rook, Color::Black, 0),
            (PieceKind::Rook, Color::Black, 7),
        ],
        Color::Black,
    );
    assert!(has_castle(&board, true));
    assert!(has_castle(&board, false));
}
