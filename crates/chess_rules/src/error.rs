//! Error types for the rules engine
//!
//! Board construction failures are configuration defects and surface as
//! [`BoardError`]. Illegal move attempts are *not* errors: they come back as a
//! [`MoveStatus`](crate::player::MoveStatus) on the transition so a driver can
//! prompt for a different input.

use thiserror::Error;

use crate::types::Color;

/// Invalid board configurations rejected by the builder
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Two pieces were placed on the same coordinate
    #[error("Square {square} is occupied more than once")]
    DuplicatePlacement { square: i8 },

    /// A piece was placed outside the 0-63 range
    #[error("Piece position {square} is off the board (must be 0-63)")]
    InvalidPosition { square: i8 },

    /// The builder was never told whose turn it is
    #[error("No move maker was set")]
    MissingMoveMaker,

    /// A color has no king among its active pieces
    #[error("{color} has no king")]
    MissingKing { color: Color },

    /// A color has more than one king
    #[error("{color} has {count} kings")]
    MultipleKings { color: Color, count: usize },

    /// The en-passant pawn does not match the board
    #[error("En passant pawn at square {square} is not a pawn of the side that just moved")]
    InvalidEnPassantPawn { square: i8 },

    /// The side that just moved is still in check
    #[error("{color} is in check but it is not {color}'s turn")]
    OpponentInCheck { color: Color },
}

/// Errors that can occur in the rules engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// Board construction failed
    #[error(transparent)]
    Board(#[from] BoardError),

    /// Invalid square index (out of bounds)
    #[error("Invalid square index: {square} (must be 0-63)")]
    InvalidSquare { square: i32 },

    /// Text that is not a coordinate like `e4`
    #[error("Invalid algebraic coordinate: {text:?}")]
    InvalidAlgebraic { text: String },

    /// The sentinel move was executed
    #[error("Cannot execute null move")]
    NullMove,
}

/// Result type alias for rules engine operations
pub type RulesResult<T> = Result<T, RulesError>;
