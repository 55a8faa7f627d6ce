//! Move execution and validation
//!
//! Functions for executing moves, checking move legality and taking moves
//! back.

use tracing::debug;

use super::game::{Game, MoveRecord};
use crate::board::is_valid_pos;
use crate::error::{RulesError, RulesResult};
use crate::moves::MoveFactory;
use crate::player::MoveStatus;

fn check_square(square: i8) -> RulesResult<()> {
    if is_valid_pos(square as i32) {
        Ok(())
    } else {
        Err(RulesError::InvalidSquare { square: square as i32 })
    }
}

/// Play the move from `src` to `dst` for the side to move
///
/// # Arguments
///
/// * `game` - The game state
/// * `src` - Source square index (0-63)
/// * `dst` - Destination square index (0-63)
///
/// # Returns
///
/// The outcome of the attempt. Only [`MoveStatus::Done`] changes the game;
/// the other statuses leave it untouched so the caller can ask again.
///
/// # Errors
///
/// [`RulesError::InvalidSquare`] when either index is off the board.
///
/// # Examples
///
/// ```rust
/// use chess_rules::api::{do_move, new_game};
/// use chess_rules::MoveStatus;
///
/// let mut game = new_game();
/// assert_eq!(do_move(&mut game, 52, 36), Ok(MoveStatus::Done));
/// assert_eq!(do_move(&mut game, 52, 44), Ok(MoveStatus::IllegalMove));
/// ```
pub fn do_move(game: &mut Game, src: i8, dst: i8) -> RulesResult<MoveStatus> {
    check_square(src)?;
    check_square(dst)?;

    let board = game.board();
    let mv = MoveFactory::create_move(board, src, dst);
    let transition = board.current_player().make_move(&mv)?;
    let status = transition.status();
    if !status.is_done() {
        debug!("[GAME] Rejected {}->{}: {:?}", src, dst, status);
        return Ok(status);
    }

    let record = MoveRecord {
        notation: mv.to_string(),
        captured: mv.attacked_piece().copied(),
    };
    let next = transition.into_board();
    debug!("[GAME] Ply {}: {}", game.log.len() + 1, record.notation);
    game.history.push(next);
    game.log.push(record);
    Ok(status)
}

/// Check if a move is legal
///
/// Validates that:
/// - Both squares are on the board
/// - The side to move has a move from `src` to `dst`
/// - The move doesn't leave the king in check
///
/// # Examples
///
/// ```rust
/// use chess_rules::api::{is_legal_move, new_game};
///
/// let game = new_game();
/// assert!(is_legal_move(&game, 52, 36));
/// assert!(!is_legal_move(&game, 12, 28));
/// ```
pub fn is_legal_move(game: &Game, src: i8, dst: i8) -> bool {
    if check_square(src).is_err() || check_square(dst).is_err() {
        return false;
    }
    let board = game.board();
    let mv = MoveFactory::create_move(board, src, dst);
    board
        .current_player()
        .make_move(&mv)
        .map(|transition| transition.status().is_done())
        .unwrap_or(false)
}

/// Take back the last move
///
/// Restores the exact previous board. Returns the record of the move taken
/// back, or `None` at the starting position.
pub fn undo_move(game: &mut Game) -> Option<MoveRecord> {
    if game.history.len() < 2 {
        return None;
    }
    game.history.pop();
    let record = game.log.pop();
    if let Some(record) = &record {
        debug!("[GAME] Undid {}", record.notation);
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::new_game;
    use crate::types::{Color, PieceKind};

    #[test]
    fn rejects_off_board_squares() {
        let mut game = new_game();
        assert_eq!(do_move(&mut game, 64, 0), Err(RulesError::InvalidSquare { square: 64 }));
        assert_eq!(do_move(&mut game, 52, -1), Err(RulesError::InvalidSquare { square: -1 }));
        assert!(!is_legal_move(&game, 70, 36));
    }

    #[test]
    fn illegal_attempts_leave_game_untouched() {
        let mut game = new_game();
        assert_eq!(do_move(&mut game, 12, 28), Ok(MoveStatus::IllegalMove));
        assert_eq!(do_move(&mut game, 36, 28), Ok(MoveStatus::IllegalMove));
        assert_eq!(game.ply_count(), 0);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn records_notation_and_captures() {
        let mut game = new_game();
        for (src, dst) in [(52, 36), (11, 27), (36, 27)] {
            assert_eq!(do_move(&mut game, src, dst), Ok(MoveStatus::Done));
        }
        let notation: Vec<&str> = game.move_log().iter().map(|r| r.notation.as_str()).collect();
        assert_eq!(notation, ["e4", "d5", "exd5"]);

        let captured: Vec<_> = game.captured_pieces().collect();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].kind, PieceKind::Pawn);
        assert_eq!(captured[0].color, Color::Black);
    }

    #[test]
    fn undo_restores_en_passant_eligibility() {
        let mut game = new_game();
        // 1.e4 a6 2.e5 d5: exd6 is available now
        for (src, dst) in [(52, 36), (8, 16), (36, 28), (11, 27)] {
            assert_eq!(do_move(&mut game, src, dst), Ok(MoveStatus::Done));
        }
        assert!(is_legal_move(&game, 28, 19));

        // 3.Nf3 h6: the chance is gone
        assert_eq!(do_move(&mut game, 62, 45), Ok(MoveStatus::Done));
        assert_eq!(do_move(&mut game, 15, 23), Ok(MoveStatus::Done));
        assert!(!is_legal_move(&game, 28, 19));

        // taking both back brings it back
        assert_eq!(undo_move(&mut game).map(|r| r.notation), Some("h6".to_string()));
        assert_eq!(undo_move(&mut game).map(|r| r.notation), Some("Nf3".to_string()));
        assert!(is_legal_move(&game, 28, 19));
        assert_eq!(game.board().en_passant_pawn().map(|p| p.position), Some(27));
    }

    #[test]
    fn undo_at_start_is_none() {
        let mut game = new_game();
        assert_eq!(undo_move(&mut game), None);
        assert_eq!(do_move(&mut game, 62, 45), Ok(MoveStatus::Done));
        assert!(undo_move(&mut game).is_some());
        assert_eq!(undo_move(&mut game), None);
        assert_eq!(game.history().len(), 1);
    }
}
