//! Bishop move generation
//!
//! Bishops slide diagonally until blocked by another piece or the board edge.

use super::sliding;
use crate::board::Placement;
use crate::constants::BISHOP_OFFSETS;
use crate::moves::Move;
use crate::types::*;

pub fn generate_bishop_moves(placement: &Placement, piece: &Piece, moves: &mut Vec<Move>) {
    sliding::generate_sliding_moves(placement, piece, &BISHOP_OFFSETS, moves);
}
