//! # Geometry Tables
//!
//! Static lookup data shared by every move generator.
//!
//! ## Coordinate Convention
//!
//! Squares are addressed by a flat index `0..64`, row-major, starting from the
//! top-left corner as White sees the board:
//!
//! ```text
//!      a  b  c  d  e  f  g  h
//!   8  0  1  2  3  4  5  6  7
//!   7  8  9 10 11 12 13 14 15
//!   ...
//!   1 56 57 58 59 60 61 62 63
//! ```
//!
//! White pawns therefore advance towards *lower* indices and Black pawns
//! towards higher ones.
//!
//! ## File Tables
//!
//! With flat indexing an eastward step from the h-file (`+1`) lands on the
//! a-file of the next rank instead of leaving the board. Every offset that can
//! wrap has an exclusion predicate built from the file membership tables below,
//! and generators consult it *before* applying the offset.

use crate::types::{Color, PieceKind};

pub const NUM_SQUARES: usize = 64;
pub const SQUARES_PER_RANK: usize = 8;

const fn init_file(file: usize) -> [bool; NUM_SQUARES] {
    let mut table = [false; NUM_SQUARES];
    let mut pos = file;
    while pos < NUM_SQUARES {
        table[pos] = true;
        pos += SQUARES_PER_RANK;
    }
    table
}

const fn init_row(first: usize) -> [bool; NUM_SQUARES] {
    let mut table = [false; NUM_SQUARES];
    let mut pos = first;
    while pos < first + SQUARES_PER_RANK {
        table[pos] = true;
        pos += 1;
    }
    table
}

pub const FILE_A: [bool; NUM_SQUARES] = init_file(0);
pub const FILE_B: [bool; NUM_SQUARES] = init_file(1);
pub const FILE_G: [bool; NUM_SQUARES] = init_file(6);
pub const FILE_H: [bool; NUM_SQUARES] = init_file(7);

pub const RANK_8: [bool; NUM_SQUARES] = init_row(0);
pub const RANK_7: [bool; NUM_SQUARES] = init_row(8);
pub const RANK_2: [bool; NUM_SQUARES] = init_row(48);
pub const RANK_1: [bool; NUM_SQUARES] = init_row(56);

pub const ALGEBRAIC_NOTATION: [&str; NUM_SQUARES] = [
    "a8", "b8", "c8", "d8", "e8", "f8", "g8", "h8",
    "a7", "b7", "c7", "d7", "e7", "f7", "g7", "h7",
    "a6", "b6", "c6", "d6", "e6", "f6", "g6", "h6",
    "a5", "b5", "c5", "d5", "e5", "f5", "g5", "h5",
    "a4", "b4", "c4", "d4", "e4", "f4", "g4", "h4",
    "a3", "b3", "c3", "d3", "e3", "f3", "g3", "h3",
    "a2", "b2", "c2", "d2", "e2", "f2", "g2", "h2",
    "a1", "b1", "c1", "d1", "e1", "f1", "g1", "h1",
];

pub const FORWARD: i8 = 8;
pub const SIDEWARD: i8 = 1;
pub const N: i8 = -FORWARD;
pub const S: i8 = FORWARD;
pub const E: i8 = SIDEWARD;
pub const W: i8 = -SIDEWARD;
pub const NE: i8 = N + E;
pub const NW: i8 = N + W;
pub const SE: i8 = S + E;
pub const SW: i8 = S + W;

pub const BISHOP_OFFSETS: [i8; 4] = [NW, NE, SW, SE];
pub const ROOK_OFFSETS: [i8; 4] = [N, W, E, S];
pub const QUEEN_OFFSETS: [i8; 8] = [NW, N, NE, W, E, SW, S, SE];
pub const KING_OFFSETS: [i8; 8] = [NW, N, NE, W, E, SW, S, SE];
pub const KNIGHT_OFFSETS: [i8; 8] = [
    N + N + W, N + N + E, W + W + N, E + E + N,
    W + W + S, E + E + S, S + S + W, S + S + E,
];

/// Pawn offsets before they are signed by [`Color::direction`]
pub const PAWN_PUSH: i8 = 8;
pub const PAWN_JUMP: i8 = 16;
pub const PAWN_CAPTURE_LEFT: i8 = 7;
pub const PAWN_CAPTURE_RIGHT: i8 = 9;
pub const PAWN_OFFSETS: [i8; 4] = [PAWN_PUSH, PAWN_JUMP, PAWN_CAPTURE_LEFT, PAWN_CAPTURE_RIGHT];

/// Fixed squares of one castle variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastleSquares {
    pub king_start: i8,
    pub rook_start: i8,
    /// Squares strictly between king and rook
    pub between: &'static [i8],
    /// Squares the king crosses or lands on
    pub king_path: &'static [i8],
    pub king_destination: i8,
    pub rook_destination: i8,
}

pub const WHITE_KING_SIDE: CastleSquares = CastleSquares {
    king_start: 60,
    rook_start: 63,
    between: &[61, 62],
    king_path: &[61, 62],
    king_destination: 62,
    rook_destination: 61,
};

pub const WHITE_QUEEN_SIDE: CastleSquares = CastleSquares {
    king_start: 60,
    rook_start: 56,
    between: &[59, 58, 57],
    king_path: &[59, 58],
    king_destination: 58,
    rook_destination: 59,
};

pub const BLACK_KING_SIDE: CastleSquares = CastleSquares {
    king_start: 4,
    rook_start: 7,
    between: &[5, 6],
    king_path: &[5, 6],
    king_destination: 6,
    rook_destination: 5,
};

pub const BLACK_QUEEN_SIDE: CastleSquares = CastleSquares {
    king_start: 4,
    rook_start: 0,
    between: &[3, 2, 1],
    king_path: &[3, 2],
    king_destination: 2,
    rook_destination: 3,
};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Canonical opening placement as `(kind, color, position)`
pub fn standard_setup() -> impl Iterator<Item = (PieceKind, Color, i8)> {
    let black_back = BACK_RANK.iter().enumerate().map(|(i, &k)| (k, Color::Black, i as i8));
    let black_pawns = (8..16).map(|pos| (PieceKind::Pawn, Color::Black, pos));
    let white_pawns = (48..56).map(|pos| (PieceKind::Pawn, Color::White, pos));
    let white_back = BACK_RANK.iter().enumerate().map(|(i, &k)| (k, Color::White, 56 + i as i8));
    black_back.chain(black_pawns).chain(white_pawns).chain(white_back)
}
