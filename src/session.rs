//! Game session driven by text input
//!
//! A [`Session`] owns one game and writes everything it has to say to a
//! caller-supplied writer. Illegal moves and unreadable lines are answered
//! with a message; only I/O failures end a session with an error.

use std::io::{BufRead, Write};

use chess_rules::api::{do_move, get_game_state, new_game, reset_game, undo_move, Game, GameState};
use chess_rules::{position_to_algebraic, MoveStatus};
use tracing::{debug, info};

use crate::error::DriverResult;
use crate::input::{parse_command, split_script, Command};
use crate::render::{render_board, render_captured, render_legal_moves, render_move_log, render_status};
use crate::settings::DriverSettings;

const HELP: &str = "Enter moves as e2e4, e2-e4 or e2 e4.\n\
Commands: undo, new, board, moves, help, quit";

/// Whether to keep reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session<W: Write> {
    game: Game,
    settings: DriverSettings,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(settings: DriverSettings, out: W) -> Self {
        Self { game: new_game(), settings, out }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Print the opening board and status
    pub fn start(&mut self) -> DriverResult<()> {
        if self.settings.show_board {
            write!(self.out, "{}", render_board(self.game.board()))?;
        }
        let state = get_game_state(&self.game);
        writeln!(self.out, "{}", render_status(self.game.board(), state))?;
        Ok(())
    }

    /// Handle one line of input
    pub fn execute(&mut self, line: &str) -> DriverResult<Flow> {
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(e) => {
                debug!("[SESSION] Unreadable input {:?}: {}", line, e);
                writeln!(self.out, "Could not read {:?}: {}", line.trim(), e)?;
                return Ok(Flow::Continue);
            }
        };

        match command {
            Command::Move { from, to } => self.play(from, to)?,
            Command::Undo => match undo_move(&mut self.game) {
                Some(record) => {
                    writeln!(self.out, "Took back {}", record.notation)?;
                    self.show_position()?;
                }
                None => writeln!(self.out, "Nothing to undo")?,
            },
            Command::New => {
                info!("[SESSION] New game after {} plies", self.game.ply_count());
                reset_game(&mut self.game);
                writeln!(self.out, "New game")?;
                self.show_position()?;
            }
            Command::Board => write!(self.out, "{}", render_board(self.game.board()))?,
            Command::Moves => writeln!(self.out, "{}", render_legal_moves(self.game.board()))?,
            Command::Help => writeln!(self.out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn play(&mut self, from: i8, to: i8) -> DriverResult<()> {
        let mover = self.game.board().next_move_maker();
        let name = |pos| position_to_algebraic(pos).unwrap_or("??");
        match do_move(&mut self.game, from, to)? {
            MoveStatus::Done => {
                if let Some(record) = self.game.move_log().last() {
                    writeln!(self.out, "{} played {}", mover, record.notation)?;
                }
                let state = self.show_position()?;
                if state.is_over() {
                    info!("[SESSION] Game over after {} plies: {}", self.game.ply_count(), state);
                }
            }
            MoveStatus::IllegalMove => {
                writeln!(self.out, "Illegal move for {}: {}-{}", mover, name(from), name(to))?;
            }
            MoveStatus::LeavesPlayerInCheck => {
                writeln!(self.out, "{}-{} would leave {} in check", name(from), name(to), mover)?;
            }
        }
        Ok(())
    }

    /// Print the position as configured and return its state
    fn show_position(&mut self) -> DriverResult<GameState> {
        if self.settings.show_board {
            write!(self.out, "{}", render_board(self.game.board()))?;
        }
        if self.settings.show_move_log {
            write!(self.out, "{}", render_move_log(self.game.move_log()))?;
        }
        if self.settings.show_captured {
            writeln!(self.out, "{}", render_captured(&self.game))?;
        }
        let state = get_game_state(&self.game);
        writeln!(self.out, "{}", render_status(self.game.board(), state))?;
        Ok(state)
    }

    /// Run every entry of a script, stopping early on `quit`
    pub fn run_script(&mut self, script: &str) -> DriverResult<Flow> {
        for entry in split_script(script) {
            if self.execute(&entry)? == Flow::Quit {
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }

    /// Read lines from `input` until `quit` or end of input
    pub fn run_interactive<R: BufRead>(&mut self, input: R) -> DriverResult<()> {
        write!(self.out, "{}", self.settings.prompt)?;
        self.out.flush()?;
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                write!(self.out, "{}", self.settings.prompt)?;
                self.out.flush()?;
                continue;
            }
            if self.execute(&line)? == Flow::Quit {
                break;
            }
            write!(self.out, "{}", self.settings.prompt)?;
            self.out.flush()?;
        }
        info!("[SESSION] Session ended after {} plies", self.game.ply_count());
        Ok(())
    }
}
