//! Rook move generation
//!
//! Rooks slide along ranks and files until blocked by another piece or the
//! board edge.

use super::sliding;
use crate::board::Placement;
use crate::constants::ROOK_OFFSETS;
use crate::moves::Move;
use crate::types::*;

pub fn generate_rook_moves(placement: &Placement, piece: &Piece, moves: &mut Vec<Move>) {
    sliding::generate_sliding_moves(placement, piece, &ROOK_OFFSETS, moves);
}
