//! Attack detection and square checking
//!
//! Attacks are read off already-generated raw move lists instead of being
//! recomputed per piece. A king is in check when any raw move of the opponent
//! lands on its square.
//!
//! Castling needs a wider notion of "targeted". A pawn only produces a
//! capture move when something stands on the diagonal, yet it still guards the
//! empty square; and a pawn push never attacks anything. Both are corrected
//! for in [`is_square_targeted`].

use super::crosses_file_edge;
use crate::constants::{PAWN_CAPTURE_LEFT, PAWN_CAPTURE_RIGHT};
use crate::moves::Move;
use crate::types::*;

/// Moves from `moves` whose destination is `square`
pub fn attacks_on_square(square: i8, moves: &[Move]) -> impl Iterator<Item = &Move> {
    moves.iter().filter(move |mv| mv.destination_coordinate() == square)
}

/// Whether a pawn covers `square` diagonally, occupied or not
fn pawn_covers(pawn: &Piece, square: i8) -> bool {
    [PAWN_CAPTURE_LEFT, PAWN_CAPTURE_RIGHT].iter().any(|&base| {
        let offset = pawn.color.direction() * base;
        !crosses_file_edge(pawn.position, offset) && pawn.position as i32 + offset as i32 == square as i32
    })
}

/// Whether the opponent whose raw moves and pieces are given targets `square`
///
/// # Arguments
///
/// * `square` - Target square index (0-63)
/// * `opponent_moves` - The opponent's unfiltered pseudo-legal moves
/// * `opponent_pieces` - The opponent's active pieces, for pawn coverage
pub fn is_square_targeted(square: i8, opponent_moves: &[Move], opponent_pieces: &[Piece]) -> bool {
    attacks_on_square(square, opponent_moves).any(|mv| !mv.is_pawn_advance())
        || opponent_pieces
            .iter()
            .filter(|piece| piece.kind.is_pawn())
            .any(|pawn| pawn_covers(pawn, square))
}
