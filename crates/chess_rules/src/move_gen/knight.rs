//! Knight move generation
//!
//! Knights jump in an L-shape and ignore pieces in between. Near the a/b and
//! g/h files some of the eight offsets wrap around the board, so each file has
//! its own exclusion list.

use super::step_move;
use crate::board::{is_valid_pos, Placement};
use crate::constants::*;
use crate::moves::Move;
use crate::types::*;

/// Offsets a knight on `pos` may not use because they would wrap a file edge
fn is_excluded(pos: i8, offset: i8) -> bool {
    let p = pos as usize;
    (FILE_A[p] && matches!(offset, -17 | -10 | 6 | 15))
        || (FILE_B[p] && matches!(offset, -10 | 6))
        || (FILE_G[p] && matches!(offset, -6 | 10))
        || (FILE_H[p] && matches!(offset, -15 | -6 | 10 | 17))
}

pub fn generate_knight_moves(placement: &Placement, piece: &Piece, moves: &mut Vec<Move>) {
    for &offset in &KNIGHT_OFFSETS {
        let destination = piece.position as i32 + offset as i32;
        if !is_valid_pos(destination) || is_excluded(piece.position, offset) {
            continue;
        }
        moves.extend(step_move(placement, piece, destination as i8));
    }
}
