//! Queen move generation
//!
//! The queen combines rook and bishop movement: eight sliding directions.

use super::sliding;
use crate::board::Placement;
use crate::constants::QUEEN_OFFSETS;
use crate::moves::Move;
use crate::types::*;

pub fn generate_queen_moves(placement: &Placement, piece: &Piece, moves: &mut Vec<Move>) {
    sliding::generate_sliding_moves(placement, piece, &QUEEN_OFFSETS, moves);
}
