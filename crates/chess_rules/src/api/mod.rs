//! Game lifecycle over the rules engine
//!
//! A [`Game`] keeps every board it has reached, so undo restores the previous
//! position exactly, first-move flags and en-passant eligibility included.
//!
//! ## Module Organization
//!
//! - `game` - Game lifecycle (new_game, reset_game)
//! - `moves` - Move execution, validation and undo (do_move, is_legal_move, undo_move)
//! - `state` - Game state queries (get_game_state)

mod game;
mod moves;
mod state;

pub use game::{new_game, reset_game, Game, MoveRecord};
pub use moves::{do_move, is_legal_move, undo_move};
pub use state::{get_game_state, GameState};
