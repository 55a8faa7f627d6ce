//! Sliding piece move generation
//!
//! Common functionality for sliding pieces (bishops, rooks, queens).
//! These pieces move multiple squares along a direction until blocked.
//!
//! ## Algorithm
//!
//! For each direction offset, walk one step at a time from the piece:
//! 1. Stop if the next step would wrap around the a- or h-file
//! 2. Stop if the next step leaves the board
//! 3. Empty square: emit a basic move and keep walking
//! 4. Enemy piece: emit an attack move, then stop
//! 5. Friendly piece: stop without a move
//!
//! The edge test in step 1 runs on the square the piece is *leaving*, before
//! the offset is applied.

use super::crosses_file_edge;
use crate::board::{is_valid_pos, Placement};
use crate::moves::Move;
use crate::types::*;

/// Generate moves for a sliding piece along `offsets`
///
/// # Arguments
///
/// * `placement` - The position being generated for
/// * `piece` - The sliding piece
/// * `offsets` - Direction offsets, one flat-index step each
/// * `moves` - Output vector to append moves to
pub fn generate_sliding_moves(placement: &Placement, piece: &Piece, offsets: &[i8], moves: &mut Vec<Move>) {
    for &offset in offsets {
        let mut current = piece.position;
        loop {
            if crosses_file_edge(current, offset) {
                break;
            }
            let next = current as i32 + offset as i32;
            if !is_valid_pos(next) {
                break;
            }
            current = next as i8;

            match placement.piece_at(current) {
                None => moves.push(Move::Basic { piece: *piece, destination: current }),
                Some(occupant) => {
                    if occupant.color != piece.color {
                        moves.push(Move::Attack {
                            piece: *piece,
                            destination: current,
                            attacked: *occupant,
                        });
                    }
                    break;
                }
            }
        }
    }
}
