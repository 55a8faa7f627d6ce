//! Player view and move validation
//!
//! A [`Player`] is not stored anywhere: it is a borrowed view over the state a
//! [`Board`] derived for one color at construction (king, legal moves, check
//! flag). Asking for a player is free.
//!
//! ## Validation
//!
//! [`Player::make_move`] is the only way a move becomes a new position:
//!
//! ```text
//! move not in legal set        -> (original board, IllegalMove)
//! execute into a trial board
//! mover's king attacked there  -> (original board, LeavesPlayerInCheck)
//! otherwise                    -> (trial board, Done)
//! ```
//!
//! Checkmate and stalemate are computed the same way, by trial-executing every
//! legal move and looking at the resulting status. That makes them the most
//! expensive queries on a board.

use std::borrow::Cow;

use tracing::debug;

use crate::board::{Board, Side};
use crate::error::RulesResult;
use crate::move_gen::attacks_on_square;
use crate::moves::Move;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of a move attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveStatus {
    Done,
    IllegalMove,
    LeavesPlayerInCheck,
}

impl MoveStatus {
    #[inline]
    pub fn is_done(self) -> bool {
        matches!(self, MoveStatus::Done)
    }
}

/// Resulting board plus outcome of a move attempt
///
/// Rejected attempts borrow the board the move was tried on; accepted ones own
/// the new board.
#[derive(Debug, Clone)]
pub struct MoveTransition<'a> {
    board: Cow<'a, Board>,
    status: MoveStatus,
}

impl<'a> MoveTransition<'a> {
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn status(&self) -> MoveStatus {
        self.status
    }

    /// The resulting board, cloning the original when the move was rejected
    pub fn into_board(self) -> Board {
        self.board.into_owned()
    }
}

/// One side of a board
#[derive(Debug, Clone, Copy)]
pub struct Player<'a> {
    board: &'a Board,
    side: &'a Side,
}

impl<'a> Player<'a> {
    pub(crate) fn new(board: &'a Board, side: &'a Side) -> Self {
        Self { board, side }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.side.color
    }

    #[inline]
    pub fn king(&self) -> &'a Piece {
        &self.side.king
    }

    #[inline]
    pub fn active_pieces(&self) -> &'a [Piece] {
        &self.side.pieces
    }

    /// Pseudo-legal moves plus eligible castles
    #[inline]
    pub fn legal_moves(&self) -> &'a [Move] {
        &self.side.legal_moves
    }

    pub fn opponent(&self) -> Player<'a> {
        self.board.player(self.color().opponent())
    }

    pub fn is_move_legal(&self, mv: &Move) -> bool {
        self.side.legal_moves.contains(mv)
    }

    #[inline]
    pub fn is_in_check(&self) -> bool {
        self.side.in_check
    }

    pub fn is_in_checkmate(&self) -> bool {
        self.is_in_check() && !self.has_escape_moves()
    }

    pub fn is_in_stalemate(&self) -> bool {
        !self.is_in_check() && !self.has_escape_moves()
    }

    /// Whether any legal move leads to a position where our king is safe
    fn has_escape_moves(&self) -> bool {
        self.side.legal_moves.iter().any(|mv| {
            self.make_move(mv)
                .map(|transition| transition.status().is_done())
                .unwrap_or(false)
        })
    }

    /// Validates and plays `mv`
    ///
    /// # Errors
    ///
    /// Only when a move from the legal set fails to execute, which means the
    /// board itself is inconsistent. Illegal attempts are reported through
    /// [`MoveTransition::status`].
    pub fn make_move(&self, mv: &Move) -> RulesResult<MoveTransition<'a>> {
        if !self.is_move_legal(mv) {
            debug!("[RULES] {} is not a legal move for {}", mv, self.color());
            return Ok(self.rejected(MoveStatus::IllegalMove));
        }

        let trial = mv.execute(self.board)?;
        let king_square = trial.current_player().opponent().king().position;
        let leaves_in_check = attacks_on_square(king_square, trial.current_player().legal_moves())
            .next()
            .is_some();
        if leaves_in_check {
            debug!("[RULES] {} leaves {} in check", mv, self.color());
            return Ok(self.rejected(MoveStatus::LeavesPlayerInCheck));
        }

        Ok(MoveTransition { board: Cow::Owned(trial), status: MoveStatus::Done })
    }

    fn rejected(&self, status: MoveStatus) -> MoveTransition<'a> {
        MoveTransition { board: Cow::Borrowed(self.board), status }
    }
}
