//! Chess rules engine
//!
//! Immutable boards, per-piece move generation and full move legality
//! (king safety, castling, en passant, queen promotion). No search, no
//! evaluation, no I/O.
//!
//! ```rust
//! use chess_rules::{Board, MoveFactory, MoveStatus};
//!
//! let board = Board::standard_starting_position();
//! let e4 = MoveFactory::create_move(&board, 52, 36);
//! let transition = board.current_player().make_move(&e4).unwrap();
//! assert_eq!(transition.status(), MoveStatus::Done);
//! ```

pub mod api;
pub mod board;
pub mod constants;
pub mod error;
pub mod move_gen;
pub mod moves;
pub mod player;
pub mod types;

pub use board::{algebraic_to_position, position_to_algebraic, Board, BoardBuilder};
pub use error::{BoardError, RulesError, RulesResult};
pub use moves::{Move, MoveFactory};
pub use player::{MoveStatus, MoveTransition, Player};
pub use types::{Color, Piece, PieceKind, Square};
