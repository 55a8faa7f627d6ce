//! Game lifecycle management
//!
//! Functions for creating and resetting games.

use tracing::debug;

use crate::board::Board;
use crate::types::Piece;

/// One accepted move, as a driver would list it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    /// Short notation of the move (`e4`, `Nxf7`, `O-O`, `a8Q`)
    pub notation: String,
    /// The piece removed from the board, if any
    pub captured: Option<Piece>,
}

/// A game in progress
///
/// `history` always holds at least the starting board; the last entry is the
/// current position. `log[i]` is the move that led from `history[i]` to
/// `history[i + 1]`.
#[derive(Debug, Clone)]
pub struct Game {
    pub(crate) history: Vec<Board>,
    pub(crate) log: Vec<MoveRecord>,
}

impl Game {
    /// The position to play from
    pub fn board(&self) -> &Board {
        // history is never empty: new_game seeds it and undo keeps the first entry
        &self.history[self.history.len() - 1]
    }

    pub fn history(&self) -> &[Board] {
        &self.history
    }

    pub fn move_log(&self) -> &[MoveRecord] {
        &self.log
    }

    /// Pieces taken so far, in capture order
    pub fn captured_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.log.iter().filter_map(|record| record.captured.as_ref())
    }

    /// Number of plies played
    pub fn ply_count(&self) -> usize {
        self.log.len()
    }
}

impl Default for Game {
    fn default() -> Self {
        new_game()
    }
}

/// Create a new game with initial position
pub fn new_game() -> Game {
    debug!("[GAME] New game from the standard starting position");
    Game {
        history: vec![Board::standard_starting_position()],
        log: Vec::new(),
    }
}

/// Reset the game to starting position
pub fn reset_game(game: &mut Game) {
    debug!("[GAME] Reset after {} plies", game.log.len());
    game.history.truncate(1);
    game.log.clear();
}
