//! Castle move generation
//!
//! A castle variant is added to a side's legal moves when all of these hold:
//! - the king has never moved and is not in check
//! - every square strictly between king and rook is empty
//! - the rook is present, is a rook of the king's color, and has never moved
//! - no square the king crosses or lands on is targeted by the opponent's
//!   *raw* moves
//!
//! The opponent's raw (unfiltered) move list is used on purpose. Filtering it
//! for legality would need check detection, which in turn needs this side's
//! moves.

use crate::board::Placement;
use crate::constants::*;
use crate::move_gen::is_square_targeted;
use crate::moves::{CastleMove, Move};
use crate::types::*;

#[derive(Clone, Copy)]
enum CastleSide {
    King,
    Queen,
}

fn variants(color: Color) -> [(CastleSide, CastleSquares); 2] {
    match color {
        Color::White => [(CastleSide::King, WHITE_KING_SIDE), (CastleSide::Queen, WHITE_QUEEN_SIDE)],
        Color::Black => [(CastleSide::King, BLACK_KING_SIDE), (CastleSide::Queen, BLACK_QUEEN_SIDE)],
    }
}

/// Append the castle moves available to `king`
///
/// # Arguments
///
/// * `placement` - The position being generated for
/// * `king` - The castling side's king
/// * `in_check` - Whether that king is currently attacked
/// * `opponent_moves` - The opponent's raw pseudo-legal moves
/// * `opponent_pieces` - The opponent's active pieces
/// * `moves` - Output vector to append castle moves to
pub fn generate_castle_moves(
    placement: &Placement,
    king: &Piece,
    in_check: bool,
    opponent_moves: &[Move],
    opponent_pieces: &[Piece],
    moves: &mut Vec<Move>,
) {
    if !king.first_move || in_check {
        return;
    }

    for (side, squares) in variants(king.color) {
        if king.position != squares.king_start {
            continue;
        }
        if squares.between.iter().any(|&pos| placement.is_occupied(pos)) {
            continue;
        }
        let rook = match placement.piece_at(squares.rook_start) {
            Some(rook) if rook.kind.is_rook() && rook.color == king.color && rook.first_move => *rook,
            _ => continue,
        };
        if squares
            .king_path
            .iter()
            .any(|&pos| is_square_targeted(pos, opponent_moves, opponent_pieces))
        {
            continue;
        }

        let castle = CastleMove {
            king: *king,
            destination: squares.king_destination,
            rook,
            rook_destination: squares.rook_destination,
        };
        moves.push(match side {
            CastleSide::King => Move::KingSideCastle(castle),
            CastleSide::Queen => Move::QueenSideCastle(castle),
        });
    }
}
