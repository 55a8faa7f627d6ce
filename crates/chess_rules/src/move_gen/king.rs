//! King move generation
//!
//! Kings move one square in any direction. Castling is not generated here:
//! it depends on the opponent's moves and is added per board by
//! [`castling`](super::castling).

use super::{crosses_file_edge, step_move};
use crate::board::{is_valid_pos, Placement};
use crate::constants::KING_OFFSETS;
use crate::moves::Move;
use crate::types::*;

pub fn generate_king_moves(placement: &Placement, piece: &Piece, moves: &mut Vec<Move>) {
    for &offset in &KING_OFFSETS {
        let destination = piece.position as i32 + offset as i32;
        if !is_valid_pos(destination) || crosses_file_edge(piece.position, offset) {
            continue;
        }
        moves.extend(step_move(placement, piece, destination as i8));
    }
}
