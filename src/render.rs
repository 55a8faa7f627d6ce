//! Text rendering of boards, move lists and game status

use std::fmt::Write as _;

use chess_rules::api::{Game, GameState, MoveRecord};
use chess_rules::{position_to_algebraic, Board, Move};

const FILE_LABELS: &str = "    a b c d e f g h";

/// Board grid with rank and file labels, White at the bottom
///
/// White pieces are uppercase, Black lowercase, empty squares `.`.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for row in 0..8i8 {
        let _ = write!(out, "{}  ", 8 - row);
        for file in 0..8i8 {
            let symbol = board.piece_at(row * 8 + file).map_or('.', |piece| piece.symbol());
            let _ = write!(out, " {symbol}");
        }
        out.push('\n');
    }
    out.push_str(FILE_LABELS);
    out.push('\n');
    out
}

/// Numbered move list, one full move per line
pub fn render_move_log(log: &[MoveRecord]) -> String {
    let mut out = String::new();
    for (number, pair) in log.chunks(2).enumerate() {
        let _ = write!(out, "{}. {}", number + 1, pair[0].notation);
        if let Some(reply) = pair.get(1) {
            let _ = write!(out, " {}", reply.notation);
        }
        out.push('\n');
    }
    out
}

/// Pieces taken so far, in capture order
///
/// White pieces are uppercase, Black lowercase.
pub fn render_captured(game: &Game) -> String {
    let taken: Vec<String> = game.captured_pieces().map(|piece| piece.symbol().to_string()).collect();
    if taken.is_empty() {
        return "Captured: -".to_string();
    }
    format!("Captured: {}", taken.join(" "))
}

/// Who is to move and whether the game is over
pub fn render_status(board: &Board, state: GameState) -> String {
    let mover = board.next_move_maker();
    match state {
        GameState::Playing => format!("{mover} to move"),
        GameState::Check => format!("{mover} to move (check)"),
        GameState::Checkmate => format!("Checkmate, {} wins", mover.opponent()),
        GameState::Stalemate => "Stalemate, draw".to_string(),
    }
}

fn coordinate(pos: i8) -> &'static str {
    position_to_algebraic(pos).unwrap_or("??")
}

/// Moves the side to move may actually play, as `e2e4 (e4)` entries
pub fn render_legal_moves(board: &Board) -> String {
    let player = board.current_player();
    let playable: Vec<&Move> = player
        .legal_moves()
        .iter()
        .filter(|mv| player.make_move(mv).map(|t| t.status().is_done()).unwrap_or(false))
        .collect();

    if playable.is_empty() {
        return "No legal moves".to_string();
    }
    playable
        .iter()
        .map(|mv| format!("{}{} ({})", coordinate(mv.current_coordinate()), coordinate(mv.destination_coordinate()), mv))
        .collect::<Vec<_>>()
        .join(", ")
}
