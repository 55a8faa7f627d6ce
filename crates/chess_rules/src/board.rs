//! Board snapshot, builder and coordinate helpers
//!
//! A [`Board`] is an immutable position. It is assembled once from a
//! [`BoardBuilder`] and eagerly derives everything a caller may ask about it:
//! active pieces per color, each side's legal move set (castling included) and
//! each side's check flag. Nothing is mutated after construction; executing a
//! move builds a new board.
//!
//! ## Construction Order
//!
//! 1. Validate the accumulated placement (occupancy, move maker, kings,
//!    en-passant pawn)
//! 2. Lay out the 64 squares
//! 3. Generate both sides' pseudo-legal moves
//! 4. Derive check flags from the *opponent's* raw moves
//! 5. Append castle moves, which consult the opponent's raw moves as well
//!
//! Castling never looks at the opponent's castle moves, so there is no
//! circular dependency between the two sides.

use std::fmt;

use tracing::trace;

use crate::constants::*;
use crate::error::{BoardError, RulesError, RulesResult};
use crate::move_gen::{attacks_on_square, generate_castle_moves, generate_pseudo_legal_moves};
use crate::moves::Move;
use crate::player::Player;
use crate::types::*;

/// Convert file and row (0 = rank 8) to linear position (0-63)
#[inline]
pub fn square_to_pos(file: i8, row: i8) -> i8 {
    row * SQUARES_PER_RANK as i8 + file
}

/// Convert position to (file, row) where row 0 is rank 8
#[inline]
pub fn pos_to_square(pos: i8) -> (i8, i8) {
    (pos % SQUARES_PER_RANK as i8, pos / SQUARES_PER_RANK as i8)
}

/// Check if position is within board bounds
#[inline]
pub fn is_valid_pos(pos: i32) -> bool {
    (0..NUM_SQUARES as i32).contains(&pos)
}

/// `e4`-style name of a coordinate
pub fn position_to_algebraic(pos: i8) -> Option<&'static str> {
    usize::try_from(pos).ok().and_then(|p| ALGEBRAIC_NOTATION.get(p)).copied()
}

/// Coordinate of an `e4`-style name; the file letter may be uppercase
pub fn algebraic_to_position(text: &str) -> RulesResult<i8> {
    let invalid = || RulesError::InvalidAlgebraic { text: text.to_string() };
    let mut chars = text.chars();
    let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
        (Some(file), Some(rank), None) => (file.to_ascii_lowercase(), rank),
        _ => return Err(invalid()),
    };
    if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
        return Err(invalid());
    }
    let file = (file as u8 - b'a') as i8;
    let row = (b'8' - rank as u8) as i8;
    Ok(square_to_pos(file, row))
}

/// Squares plus the pawn that may be captured en passant
///
/// This is everything the move generators read; the derived player state lives
/// on [`Board`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    squares: [Square; NUM_SQUARES],
    en_passant_pawn: Option<Piece>,
}

impl Placement {
    #[inline]
    pub(crate) fn square(&self, pos: i8) -> &Square {
        &self.squares[pos as usize]
    }

    #[inline]
    pub fn piece_at(&self, pos: i8) -> Option<&Piece> {
        self.squares.get(usize::try_from(pos).ok()?)?.piece()
    }

    #[inline]
    pub fn is_occupied(&self, pos: i8) -> bool {
        self.square(pos).is_occupied()
    }

    #[inline]
    pub fn en_passant_pawn(&self) -> Option<&Piece> {
        self.en_passant_pawn.as_ref()
    }

    fn pieces_of(&self, color: Color) -> Vec<Piece> {
        self.squares
            .iter()
            .filter_map(Square::piece)
            .filter(|piece| piece.color == color)
            .copied()
            .collect()
    }
}

/// State of one side derived at board construction
#[derive(Debug, Clone)]
pub(crate) struct Side {
    pub(crate) color: Color,
    pub(crate) king: Piece,
    pub(crate) pieces: Vec<Piece>,
    pub(crate) legal_moves: Vec<Move>,
    pub(crate) in_check: bool,
}

/// Immutable position snapshot
#[derive(Debug, Clone)]
pub struct Board {
    placement: Placement,
    white: Side,
    black: Side,
    next_move_maker: Color,
}

impl Board {
    /// The canonical 32-piece setup with White to move
    pub fn standard_starting_position() -> Board {
        let mut builder = BoardBuilder::new();
        for (kind, color, pos) in standard_setup() {
            builder.set_piece(Piece::new(kind, color, pos));
        }
        builder.set_move_maker(Color::White);
        let placement = builder.placement();
        Board::derive(
            placement,
            Color::White,
            Piece::new(PieceKind::King, Color::White, WHITE_KING_SIDE.king_start),
            Piece::new(PieceKind::King, Color::Black, BLACK_KING_SIDE.king_start),
        )
    }

    /// Builds the derived state. Kings must already be validated.
    fn derive(placement: Placement, next_move_maker: Color, white_king: Piece, black_king: Piece) -> Board {
        let white_pieces = placement.pieces_of(Color::White);
        let black_pieces = placement.pieces_of(Color::Black);

        let mut white_moves = Vec::new();
        for piece in &white_pieces {
            generate_pseudo_legal_moves(&placement, piece, &mut white_moves);
        }
        let mut black_moves = Vec::new();
        for piece in &black_pieces {
            generate_pseudo_legal_moves(&placement, piece, &mut black_moves);
        }

        let white_in_check = attacks_on_square(white_king.position, &black_moves).next().is_some();
        let black_in_check = attacks_on_square(black_king.position, &white_moves).next().is_some();

        let mut white_castles = Vec::new();
        generate_castle_moves(&placement, &white_king, white_in_check, &black_moves, &black_pieces, &mut white_castles);
        let mut black_castles = Vec::new();
        generate_castle_moves(&placement, &black_king, black_in_check, &white_moves, &white_pieces, &mut black_castles);
        white_moves.append(&mut white_castles);
        black_moves.append(&mut black_castles);

        trace!(
            "[RULES] Board derived: {} white / {} black pieces, {} to move",
            white_pieces.len(),
            black_pieces.len(),
            next_move_maker
        );

        Board {
            placement,
            white: Side {
                color: Color::White,
                king: white_king,
                pieces: white_pieces,
                legal_moves: white_moves,
                in_check: white_in_check,
            },
            black: Side {
                color: Color::Black,
                king: black_king,
                pieces: black_pieces,
                legal_moves: black_moves,
                in_check: black_in_check,
            },
            next_move_maker,
        }
    }

    /// Square at `pos`, failing for coordinates outside 0-63
    pub fn square(&self, pos: i8) -> RulesResult<&Square> {
        if !is_valid_pos(pos as i32) {
            return Err(RulesError::InvalidSquare { square: pos as i32 });
        }
        Ok(self.placement.square(pos))
    }

    #[inline]
    pub fn piece_at(&self, pos: i8) -> Option<&Piece> {
        self.placement.piece_at(pos)
    }

    #[inline]
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    #[inline]
    pub fn white_pieces(&self) -> &[Piece] {
        &self.white.pieces
    }

    #[inline]
    pub fn black_pieces(&self) -> &[Piece] {
        &self.black.pieces
    }

    pub fn active_pieces(&self, color: Color) -> &[Piece] {
        &self.side(color).pieces
    }

    pub fn all_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.white.pieces.iter().chain(&self.black.pieces)
    }

    pub(crate) fn side(&self, color: Color) -> &Side {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    pub fn player(&self, color: Color) -> Player<'_> {
        Player::new(self, self.side(color))
    }

    pub fn white_player(&self) -> Player<'_> {
        self.player(Color::White)
    }

    pub fn black_player(&self) -> Player<'_> {
        self.player(Color::Black)
    }

    pub fn current_player(&self) -> Player<'_> {
        self.player(self.next_move_maker)
    }

    #[inline]
    pub fn next_move_maker(&self) -> Color {
        self.next_move_maker
    }

    /// Pawn that just made a two-square advance, if any
    #[inline]
    pub fn en_passant_pawn(&self) -> Option<&Piece> {
        self.placement.en_passant_pawn()
    }

    /// Both players' legal moves, White's first
    pub fn all_legal_moves(&self) -> impl Iterator<Item = &Move> {
        self.white.legal_moves.iter().chain(&self.black.legal_moves)
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.placement == other.placement && self.next_move_maker == other.next_move_maker
    }
}

impl Eq for Board {}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.placement.squares.chunks(SQUARES_PER_RANK) {
            for square in row {
                write!(f, "  {square}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Accumulates placements for a new [`Board`]
///
/// Problems are recorded as they happen and reported by [`build`](Self::build),
/// so the setters can be chained.
#[derive(Debug, Clone)]
pub struct BoardBuilder {
    config: [Option<Piece>; NUM_SQUARES],
    next_move_maker: Option<Color>,
    en_passant_pawn: Option<Piece>,
    error: Option<BoardError>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self {
            config: [None; NUM_SQUARES],
            next_move_maker: None,
            en_passant_pawn: None,
            error: None,
        }
    }
}

impl BoardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `piece` on its own position
    pub fn set_piece(&mut self, piece: Piece) -> &mut Self {
        if !is_valid_pos(piece.position as i32) {
            self.record(BoardError::InvalidPosition { square: piece.position });
            return self;
        }
        let slot = &mut self.config[piece.position as usize];
        if slot.is_some() {
            self.record(BoardError::DuplicatePlacement { square: piece.position });
        } else {
            *slot = Some(piece);
        }
        self
    }

    /// Places `piece`, discarding whatever stood on its square
    pub(crate) fn replace_piece(&mut self, piece: Piece) -> &mut Self {
        if is_valid_pos(piece.position as i32) {
            self.config[piece.position as usize] = Some(piece);
        } else {
            self.record(BoardError::InvalidPosition { square: piece.position });
        }
        self
    }

    pub fn set_move_maker(&mut self, color: Color) -> &mut Self {
        self.next_move_maker = Some(color);
        self
    }

    pub fn set_en_passant_pawn(&mut self, pawn: Piece) -> &mut Self {
        self.en_passant_pawn = Some(pawn);
        self
    }

    fn record(&mut self, error: BoardError) {
        self.error.get_or_insert(error);
    }

    fn placement(&self) -> Placement {
        let mut squares = EMPTY_SQUARES;
        for (pos, piece) in self.config.iter().enumerate() {
            squares[pos] = Square::create(pos as i8, *piece);
        }
        Placement { squares, en_passant_pawn: self.en_passant_pawn }
    }

    fn find_king(&self, color: Color) -> Result<Piece, BoardError> {
        let mut kings = self
            .config
            .iter()
            .flatten()
            .filter(|piece| piece.color == color && piece.kind.is_king());
        match (kings.next(), kings.count()) {
            (None, _) => Err(BoardError::MissingKing { color }),
            (Some(king), 0) => Ok(*king),
            (Some(_), extra) => Err(BoardError::MultipleKings { color, count: extra + 1 }),
        }
    }

    /// Validates the configuration and derives a board
    ///
    /// Besides the structural checks this rejects positions where the side
    /// that just moved is in check. Such a position cannot arise from play and
    /// would let the side to move capture a king.
    pub fn build(&self) -> RulesResult<Board> {
        let board = self.build_position()?;
        let waiting = board.side(board.next_move_maker.opponent());
        if waiting.in_check {
            return Err(BoardError::OpponentInCheck { color: waiting.color }.into());
        }
        Ok(board)
    }

    /// Like [`build`](Self::build) without the check on the waiting side.
    /// Move execution needs this for trial boards.
    pub(crate) fn build_position(&self) -> RulesResult<Board> {
        if let Some(error) = &self.error {
            return Err(error.clone().into());
        }
        let next_move_maker = self.next_move_maker.ok_or(BoardError::MissingMoveMaker)?;
        let white_king = self.find_king(Color::White)?;
        let black_king = self.find_king(Color::Black)?;

        if let Some(pawn) = &self.en_passant_pawn {
            let on_board = is_valid_pos(pawn.position as i32) && self.config[pawn.position as usize] == Some(*pawn);
            if !on_board || !pawn.kind.is_pawn() || pawn.color != next_move_maker.opponent() {
                return Err(BoardError::InvalidEnPassantPawn { square: pawn.position }.into());
            }
        }

        Ok(Board::derive(self.placement(), next_move_maker, white_king, black_king))
    }
}
