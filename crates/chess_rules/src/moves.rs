//! Move variants and their execution
//!
//! A [`Move`] carries enough data to compute the board that follows it. It
//! does not hold the board it was generated on; [`Move::execute`] takes that
//! board as an argument.
//!
//! ## Execution
//!
//! Every variant rebuilds the position through a [`BoardBuilder`]:
//!
//! 1. Copy the mover's active pieces except the moving piece (and, for a
//!    castle, the castling rook)
//! 2. Copy the opponent's active pieces except a captured one. For en passant
//!    the captured pawn is *not* on the destination square
//! 3. Place the moved piece on its destination with its first-move flag
//!    cleared
//! 4. Hand the turn to the opponent; only a pawn jump registers a new
//!    en-passant pawn
//!
//! A promotion runs its wrapped move first and then swaps the pawn on the
//! destination for a queen.
//!
//! ## Equality
//!
//! Two moves are equal when they move the same piece (kind, color, origin,
//! first-move flag) to the same destination, whatever their variant.

use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::debug;

use crate::board::{position_to_algebraic, Board, BoardBuilder};
use crate::error::{RulesError, RulesResult};
use crate::types::*;

/// King and rook data of a castle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastleMove {
    pub king: Piece,
    pub destination: i8,
    pub rook: Piece,
    pub rook_destination: i8,
}

/// One move of one piece
#[derive(Debug, Clone)]
pub enum Move {
    /// Non-pawn move to an empty square
    Basic { piece: Piece, destination: i8 },
    /// Non-pawn capture on the destination
    Attack { piece: Piece, destination: i8, attacked: Piece },
    /// Single pawn push
    PawnMove { piece: Piece, destination: i8 },
    /// Two-square pawn advance; the pawn becomes capturable en passant
    PawnJump { piece: Piece, destination: i8 },
    /// Diagonal pawn capture on the destination
    PawnAttack { piece: Piece, destination: i8, attacked: Piece },
    /// Diagonal pawn capture of the pawn beside the mover
    PawnEnPassantAttack { piece: Piece, destination: i8, attacked: Piece },
    /// Pawn reaching the back rank
    PawnPromotion { inner: Box<Move>, promote_to: PieceKind },
    KingSideCastle(CastleMove),
    QueenSideCastle(CastleMove),
    /// Sentinel for "no such legal move"; cannot be executed
    Null,
}

impl Move {
    /// The piece being moved, as it stands before the move
    pub fn moved_piece(&self) -> Option<&Piece> {
        match self {
            Move::Basic { piece, .. }
            | Move::Attack { piece, .. }
            | Move::PawnMove { piece, .. }
            | Move::PawnJump { piece, .. }
            | Move::PawnAttack { piece, .. }
            | Move::PawnEnPassantAttack { piece, .. } => Some(piece),
            Move::PawnPromotion { inner, .. } => inner.moved_piece(),
            Move::KingSideCastle(castle) | Move::QueenSideCastle(castle) => Some(&castle.king),
            Move::Null => None,
        }
    }

    /// Origin square, `-1` for the sentinel
    pub fn current_coordinate(&self) -> i8 {
        self.moved_piece().map_or(-1, |piece| piece.position)
    }

    /// Destination square, `-1` for the sentinel
    pub fn destination_coordinate(&self) -> i8 {
        match self {
            Move::Basic { destination, .. }
            | Move::Attack { destination, .. }
            | Move::PawnMove { destination, .. }
            | Move::PawnJump { destination, .. }
            | Move::PawnAttack { destination, .. }
            | Move::PawnEnPassantAttack { destination, .. } => *destination,
            Move::PawnPromotion { inner, .. } => inner.destination_coordinate(),
            Move::KingSideCastle(castle) | Move::QueenSideCastle(castle) => castle.destination,
            Move::Null => -1,
        }
    }

    pub fn attacked_piece(&self) -> Option<&Piece> {
        match self {
            Move::Attack { attacked, .. }
            | Move::PawnAttack { attacked, .. }
            | Move::PawnEnPassantAttack { attacked, .. } => Some(attacked),
            Move::PawnPromotion { inner, .. } => inner.attacked_piece(),
            _ => None,
        }
    }

    #[inline]
    pub fn is_attack(&self) -> bool {
        self.attacked_piece().is_some()
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        matches!(self, Move::KingSideCastle(_) | Move::QueenSideCastle(_))
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        matches!(self, Move::PawnPromotion { .. })
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Move::Null)
    }

    /// Pawn pushes and jumps, which never attack their destination
    pub fn is_pawn_advance(&self) -> bool {
        match self {
            Move::PawnMove { .. } | Move::PawnJump { .. } => true,
            Move::PawnPromotion { inner, .. } => inner.is_pawn_advance(),
            _ => false,
        }
    }

    /// Accumulates the position after this move
    fn transfer(&self, board: &Board) -> RulesResult<BoardBuilder> {
        let piece = match self.moved_piece() {
            Some(piece) => *piece,
            None => return Err(RulesError::NullMove),
        };
        if let Move::PawnPromotion { inner, promote_to } = self {
            let mut builder = inner.transfer(board)?;
            builder.replace_piece(piece.moved_to(inner.destination_coordinate()).promoted_to(*promote_to));
            return Ok(builder);
        }

        let castle_rook = match self {
            Move::KingSideCastle(castle) | Move::QueenSideCastle(castle) => Some(castle),
            _ => None,
        };
        let captured = self.attacked_piece();

        let mut builder = BoardBuilder::new();
        for own in board.active_pieces(piece.color) {
            if *own != piece && castle_rook.map_or(true, |castle| *own != castle.rook) {
                builder.set_piece(*own);
            }
        }
        for other in board.active_pieces(piece.color.opponent()) {
            if Some(other) != captured {
                builder.set_piece(*other);
            }
        }

        let moved = piece.moved_to(self.destination_coordinate());
        builder.set_piece(moved);
        if let Some(castle) = castle_rook {
            builder.set_piece(castle.rook.moved_to(castle.rook_destination));
        }
        if let Move::PawnJump { .. } = self {
            builder.set_en_passant_pawn(moved);
        }
        builder.set_move_maker(piece.color.opponent());
        Ok(builder)
    }

    /// The board that results from playing this move on `board`
    ///
    /// Does not check legality; see
    /// [`Player::make_move`](crate::player::Player::make_move).
    ///
    /// # Errors
    ///
    /// [`RulesError::NullMove`] for the sentinel, which signals that a caller
    /// asked for a move with no legal counterpart.
    pub fn execute(&self, board: &Board) -> RulesResult<Board> {
        let result = self.transfer(board).and_then(|builder| builder.build_position());
        if let Err(error) = &result {
            debug!("[RULES] Failed to execute {}: {}", self, error);
        }
        result
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.moved_piece() == other.moved_piece() && self.destination_coordinate() == other.destination_coordinate()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.moved_piece().hash(state);
        self.destination_coordinate().hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let square = |pos: i8| position_to_algebraic(pos).unwrap_or("??");
        match self {
            Move::Basic { piece, destination } => write!(f, "{}{}", piece.kind, square(*destination)),
            Move::Attack { piece, destination, .. } => write!(f, "{}x{}", piece.kind, square(*destination)),
            Move::PawnMove { destination, .. } | Move::PawnJump { destination, .. } => {
                f.write_str(square(*destination))
            }
            Move::PawnAttack { piece, destination, .. } | Move::PawnEnPassantAttack { piece, destination, .. } => {
                let file = square(piece.position).chars().next().unwrap_or('?');
                write!(f, "{}x{}", file, square(*destination))
            }
            Move::PawnPromotion { inner, promote_to } => write!(f, "{inner}{promote_to}"),
            Move::KingSideCastle(_) => f.write_str("O-O"),
            Move::QueenSideCastle(_) => f.write_str("O-O-O"),
            Move::Null => f.write_str("Null Move"),
        }
    }
}

/// Translates coordinate input into engine moves
pub struct MoveFactory;

impl MoveFactory {
    /// First legal move of either side from `from` to `to`, or [`Move::Null`]
    pub fn create_move(board: &Board, from: i8, to: i8) -> Move {
        board
            .all_legal_moves()
            .find(|mv| mv.current_coordinate() == from && mv.destination_coordinate() == to)
            .cloned()
            .unwrap_or(Move::Null)
    }
}
