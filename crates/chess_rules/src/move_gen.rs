//! Pseudo-legal move generation
//!
//! Generates every move a piece's geometry allows on a [`Placement`], without
//! asking whether the mover's own king ends up attacked. King safety is decided
//! later by [`Player::make_move`](crate::player::Player::make_move), which
//! simulates the move.
//!
//! Dispatch is an exhaustive `match` over [`PieceKind`]; each kind lives in its
//! own submodule. Castling is not a per-piece move. It depends on both sides'
//! raw moves and is generated by [`castling`] once per board.

mod attack;
mod bishop;
mod castling;
mod king;
mod knight;
mod pawn;
mod queen;
mod rook;
mod sliding;

#[cfg(test)]
mod tests;

pub use attack::{attacks_on_square, is_square_targeted};
pub use castling::generate_castle_moves;

use crate::board::Placement;
use crate::constants::*;
use crate::moves::Move;
use crate::types::*;

/// Append the pseudo-legal moves of `piece` to `moves`
///
/// # Examples
///
/// ```rust
/// use chess_rules::board::Board;
/// use chess_rules::move_gen::generate_pseudo_legal_moves;
///
/// let board = Board::standard_starting_position();
/// let knight = *board.piece_at(62).unwrap();
/// let mut moves = Vec::new();
/// generate_pseudo_legal_moves(board.placement(), &knight, &mut moves);
/// assert_eq!(moves.len(), 2);
/// ```
pub fn generate_pseudo_legal_moves(placement: &Placement, piece: &Piece, moves: &mut Vec<Move>) {
    match piece.kind {
        PieceKind::Pawn => pawn::generate_pawn_moves(placement, piece, moves),
        PieceKind::Knight => knight::generate_knight_moves(placement, piece, moves),
        PieceKind::Bishop => bishop::generate_bishop_moves(placement, piece, moves),
        PieceKind::Rook => rook::generate_rook_moves(placement, piece, moves),
        PieceKind::Queen => queen::generate_queen_moves(placement, piece, moves),
        PieceKind::King => king::generate_king_moves(placement, piece, moves),
    }
}

/// Whether a one-square step by `offset` from `pos` would wrap around the
/// a- or h-file
///
/// Must be consulted before the offset is applied: on a flat index an
/// eastward step from h4 lands on a3 and still looks like a valid square.
#[inline]
pub(crate) fn crosses_file_edge(pos: i8, offset: i8) -> bool {
    let pos = pos as usize;
    match offset {
        NW | W | SW => FILE_A[pos],
        NE | E | SE => FILE_H[pos],
        _ => false,
    }
}

/// The move a knight or king makes to `destination`, if any
///
/// Empty squares give a basic move, enemy pieces an attack, friendly pieces
/// nothing.
fn step_move(placement: &Placement, piece: &Piece, destination: i8) -> Option<Move> {
    match placement.piece_at(destination) {
        None => Some(Move::Basic { piece: *piece, destination }),
        Some(occupant) if occupant.color != piece.color => Some(Move::Attack {
            piece: *piece,
            destination,
            attacked: *occupant,
        }),
        Some(_) => None,
    }
}
