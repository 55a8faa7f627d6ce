//! # Core Value Types
//!
//! Every type in this module is a small `Copy` value. Nothing here is ever
//! mutated after construction: moving a piece produces a *new* [`Piece`] at the
//! destination with its first-move flag cleared.
//!
//! ## Color as Data
//!
//! Per-color behavior (pawn direction, promotion rank, starting rank) is a
//! plain lookup keyed on the two-valued [`Color`] tag:
//!
//! | Color | `direction()` | promotes on | pawns start on |
//! |-------|---------------|-------------|----------------|
//! | White | `-1`          | rank 8      | rank 2         |
//! | Black | `+1`          | rank 1      | rank 7         |
//!
//! ## Squares
//!
//! A [`Square`] is either empty or occupied. Empty squares are interchangeable,
//! so all 64 of them live in the static [`EMPTY_SQUARES`] table and boards copy
//! from it instead of constructing new ones.

use std::fmt;

use crate::constants::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Side of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Sign applied to pawn offsets along the flat index
    #[inline]
    pub const fn direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Whether a pawn of this color promotes on `pos`; false off the board
    pub fn is_promotion_square(self, pos: i8) -> bool {
        let rank = match self {
            Color::White => &RANK_8,
            Color::Black => &RANK_1,
        };
        on_rank(rank, pos)
    }

    /// Whether `pos` is on this color's pawn starting rank; false off the board
    pub fn is_pawn_start_square(self, pos: i8) -> bool {
        let rank = match self {
            Color::White => &RANK_2,
            Color::Black => &RANK_7,
        };
        on_rank(rank, pos)
    }
}

fn on_rank(rank: &[bool; NUM_SQUARES], pos: i8) -> bool {
    usize::try_from(pos).ok().and_then(|pos| rank.get(pos)).copied().unwrap_or(false)
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("White"),
            Color::Black => f.write_str("Black"),
        }
    }
}

/// Kind of chess piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const fn symbol(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self, PieceKind::King)
    }

    #[inline]
    pub const fn is_rook(self) -> bool {
        matches!(self, PieceKind::Rook)
    }

    #[inline]
    pub const fn is_pawn(self) -> bool {
        matches!(self, PieceKind::Pawn)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A piece standing on a square
///
/// Two pieces are equal when kind, color, position *and* first-move flag all
/// match. Move legality relies on this identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub position: i8,
    pub first_move: bool,
}

impl Piece {
    /// A piece that has not moved yet
    pub const fn new(kind: PieceKind, color: Color, position: i8) -> Self {
        Self::with_first_move(kind, color, position, true)
    }

    pub const fn with_first_move(kind: PieceKind, color: Color, position: i8, first_move: bool) -> Self {
        Self { kind, color, position, first_move }
    }

    /// The same piece after moving to `destination`
    #[inline]
    pub const fn moved_to(self, destination: i8) -> Self {
        Self::with_first_move(self.kind, self.color, destination, false)
    }

    /// A piece of `kind` replacing this one on its square
    #[inline]
    pub const fn promoted_to(self, kind: PieceKind) -> Self {
        Self::with_first_move(kind, self.color, self.position, false)
    }

    /// Uppercase for White, lowercase for Black
    pub fn symbol(self) -> char {
        match self.color {
            Color::White => self.kind.symbol(),
            Color::Black => self.kind.symbol().to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One of the 64 board cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Square {
    Empty(i8),
    Occupied(i8, Piece),
}

const fn init_empty_squares() -> [Square; NUM_SQUARES] {
    let mut squares = [Square::Empty(0); NUM_SQUARES];
    let mut pos = 0;
    while pos < NUM_SQUARES {
        squares[pos] = Square::Empty(pos as i8);
        pos += 1;
    }
    squares
}

/// The shared empty square for every coordinate
pub static EMPTY_SQUARES: [Square; NUM_SQUARES] = init_empty_squares();

impl Square {
    /// Builds the square for `pos`, reusing the static empty entry when vacant
    pub(crate) fn create(pos: i8, piece: Option<Piece>) -> Self {
        match piece {
            Some(piece) => Square::Occupied(pos, piece),
            None => EMPTY_SQUARES[pos as usize],
        }
    }

    #[inline]
    pub fn position(&self) -> i8 {
        match *self {
            Square::Empty(pos) | Square::Occupied(pos, _) => pos,
        }
    }

    #[inline]
    pub fn is_occupied(&self) -> bool {
        matches!(self, Square::Occupied(..))
    }

    #[inline]
    pub fn piece(&self) -> Option<&Piece> {
        match self {
            Square::Empty(_) => None,
            Square::Occupied(_, piece) => Some(piece),
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Square::Empty(_) => f.write_str("-"),
            Square::Occupied(_, piece) => write!(f, "{piece}"),
        }
    }
}
