//! Game Flow Integration Tests
//!
//! Tests for full game flows through the driver:
//! - Turn alternation
//! - Rejected input as prompts
//! - Undo fidelity
//! - Win and draw conditions

use chess_rules::api::{get_game_state, GameState};
use chess_rules::{Color, PieceKind};
use xfchess_rules::{DriverSettings, Flow, Session};

fn session() -> Session<Vec<u8>> {
    let settings = DriverSettings {
        show_board: false,
        show_move_log: true,
        show_captured: true,
        prompt: String::new(),
    };
    Session::new(settings, Vec::new())
}

fn text(session: Session<Vec<u8>>) -> String {
    String::from_utf8(session.into_output()).expect("utf-8 output")
}

// ============================================================================
// Turn Alternation Tests
// ============================================================================

#[test]
fn test_turns_alternate() {
    let mut session = session();
    session.run_script("e2e4").expect("script runs");
    assert_eq!(session.game().board().next_move_maker(), Color::Black);

    // white may not move twice
    session.run_script("d2d4").expect("script runs");
    assert_eq!(session.game().ply_count(), 1);

    session.run_script("d7d5").expect("script runs");
    assert_eq!(session.game().board().next_move_maker(), Color::White);
    assert!(text(session).contains("1. e4 d5"));
}

// ============================================================================
// Rejected Input Tests
// ============================================================================

#[test]
fn test_pinned_piece_reports_check() {
    let mut session = session();
    // 1.e4 d5 2.Bb5+
    session.run_script("e2e4 d7d5 f1b5").expect("script runs");
    assert_eq!(get_game_state(session.game()), GameState::Check);

    session.run_script("a7a6").expect("script runs");
    assert_eq!(session.game().ply_count(), 3);
    assert!(text(session).contains("a7-a6 would leave Black in check"));
}

#[test]
fn test_garbage_does_not_end_session() {
    let mut session = session();
    let flow = session.run_script("hello e2e4 z9z9 e7e5").expect("script runs");
    assert_eq!(flow, Flow::Continue);
    assert_eq!(session.game().ply_count(), 2);
}

// ============================================================================
// Undo Tests
// ============================================================================

#[test]
fn test_undo_restores_castling_rights() {
    let mut session = session();
    session.run_script("e2e4 e7e5 g1f3 b8c6 f1c4 g8f6").expect("script runs");

    // King steps out and back: castling is lost
    session.run_script("e1e2 f8c5 e2e1 d7d6 e1g1").expect("script runs");
    assert_eq!(session.game().ply_count(), 10);

    // Undoing past the king move gives it back
    session.run_script("undo undo undo undo e1g1").expect("script runs");
    assert_eq!(session.game().ply_count(), 7);
    assert_eq!(session.game().move_log().last().map(|r| r.notation.as_str()), Some("O-O"));
}

#[test]
fn test_new_game_clears_history_and_captures() {
    let mut session = session();
    session.run_script("e2e4 d7d5 e4d5").expect("script runs");
    assert_eq!(session.game().captured_pieces().count(), 1);

    session.run_script("new").expect("script runs");
    assert_eq!(session.game().ply_count(), 0);
    assert_eq!(session.game().captured_pieces().count(), 0);
    assert_eq!(session.game().board().next_move_maker(), Color::White);
    assert_eq!(session.game().board().piece_at(51).map(|p| p.kind), Some(PieceKind::Pawn));

    // nothing left to take back
    session.run_script("undo e2e4").expect("script runs");
    assert_eq!(session.game().ply_count(), 1);

    let out = text(session);
    assert!(out.contains("Captured: p\n"));
    assert!(out.contains("New game"));
    assert!(out.contains("Nothing to undo"));
}

// ============================================================================
// Win Condition Tests
// ============================================================================

#[test]
fn test_fools_mate_through_driver() {
    let mut session = session();
    session.run_script("f2f3 e7e5 g2g4 d8h4").expect("script runs");
    assert_eq!(get_game_state(session.game()), GameState::Checkmate);

    // nothing moves after mate
    session.run_script("a2a3").expect("script runs");
    assert_eq!(session.game().ply_count(), 4);
    assert!(text(session).contains("Checkmate, Black wins"));
}

#[test]
fn test_quit_command() {
    let mut session = session();
    assert_eq!(session.run_script("e2e4 quit").expect("script runs"), Flow::Quit);
}
