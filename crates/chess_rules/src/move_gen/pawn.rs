//! Pawn move generation
//!
//! Handles the four pawn offsets, each signed by the pawn's color direction:
//! - **Push (8)**: onto an empty square, promoting on the back rank
//! - **Jump (16)**: from the starting rank on the pawn's first move, when both
//!   the intermediate and destination squares are empty
//! - **Captures (7, 9)**: diagonal, either an ordinary capture (promoting on
//!   the back rank) or an en-passant capture of the pawn that just jumped
//!   alongside
//!
//! Promotion is always to a queen.

use super::crosses_file_edge;
use crate::board::{is_valid_pos, Placement};
use crate::constants::*;
use crate::moves::Move;
use crate::types::*;

/// Wraps `mv` in a queen promotion when it lands on the back rank
fn promote_if_needed(color: Color, mv: Move) -> Move {
    if color.is_promotion_square(mv.destination_coordinate()) {
        Move::PawnPromotion { inner: Box::new(mv), promote_to: PieceKind::Queen }
    } else {
        mv
    }
}

pub fn generate_pawn_moves(placement: &Placement, piece: &Piece, moves: &mut Vec<Move>) {
    let direction = piece.color.direction();

    for &base in &PAWN_OFFSETS {
        let offset = direction * base;
        let target = piece.position as i32 + offset as i32;
        if !is_valid_pos(target) {
            continue;
        }
        let destination = target as i8;

        match base {
            PAWN_PUSH => {
                if !placement.is_occupied(destination) {
                    let push = Move::PawnMove { piece: *piece, destination };
                    moves.push(promote_if_needed(piece.color, push));
                }
            }
            PAWN_JUMP => {
                if !piece.first_move || !piece.color.is_pawn_start_square(piece.position) {
                    continue;
                }
                let behind = piece.position + direction * PAWN_PUSH;
                if !placement.is_occupied(behind) && !placement.is_occupied(destination) {
                    moves.push(Move::PawnJump { piece: *piece, destination });
                }
            }
            _ => {
                if crosses_file_edge(piece.position, offset) {
                    continue;
                }
                if let Some(attacked) = placement.piece_at(destination) {
                    if attacked.color != piece.color {
                        let capture = Move::PawnAttack { piece: *piece, destination, attacked: *attacked };
                        moves.push(promote_if_needed(piece.color, capture));
                    }
                } else if let Some(passed) = placement.en_passant_pawn() {
                    // The jumped pawn stands beside us, one step behind the destination.
                    let beside = destination - direction * PAWN_PUSH;
                    if passed.position == beside && passed.color != piece.color {
                        moves.push(Move::PawnEnPassantAttack { piece: *piece, destination, attacked: *passed });
                    }
                }
            }
        }
    }
}
