//! Game state queries

use std::fmt;

use super::game::Game;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where the side to move stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameState {
    Playing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameState {
    /// Whether the game has ended
    pub fn is_over(self) -> bool {
        matches!(self, GameState::Checkmate | GameState::Stalemate)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameState::Playing => "playing",
            GameState::Check => "check",
            GameState::Checkmate => "checkmate",
            GameState::Stalemate => "stalemate",
        };
        f.write_str(text)
    }
}

/// Get current game state (playing, check, checkmate, stalemate)
pub fn get_game_state(game: &Game) -> GameState {
    let player = game.board().current_player();
    if player.is_in_check() {
        if player.is_in_checkmate() {
            GameState::Checkmate
        } else {
            GameState::Check
        }
    } else if player.is_in_stalemate() {
        GameState::Stalemate
    } else {
        GameState::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{do_move, new_game};
    use crate::player::MoveStatus;

    fn play(game: &mut Game, moves: &[(i8, i8)]) {
        for &(src, dst) in moves {
            assert_eq!(do_move(game, src, dst), Ok(MoveStatus::Done), "{src}->{dst}");
        }
    }

    #[test]
    fn opening_is_playing() {
        assert_eq!(get_game_state(&new_game()), GameState::Playing);
    }

    #[test]
    fn scholars_mate() {
        let mut game = new_game();
        // 1.e4 e5 2.Bc4 Nc6 3.Qh5 Nf6 4.Qxf7#
        play(&mut game, &[(52, 36), (12, 28), (61, 34), (1, 18), (59, 31), (6, 21), (31, 13)]);
        let state = get_game_state(&game);
        assert_eq!(state, GameState::Checkmate);
        assert!(state.is_over());
        assert_eq!(game.move_log().last().map(|r| r.notation.as_str()), Some("Qxf7"));
    }

    #[test]
    fn check_that_can_be_answered() {
        let mut game = new_game();
        // 1.e4 d5 2.Bb5+
        play(&mut game, &[(52, 36), (11, 27), (61, 25)]);
        assert_eq!(get_game_state(&game), GameState::Check);
        assert!(!GameState::Check.is_over());
    }
}
