//! Text input parsing
//!
//! A line is either a command word or a coordinate pair. Coordinate pairs may
//! be written `e2e4`, `e2-e4` or `e2 e4`.

use chess_rules::algebraic_to_position;

use crate::error::InputError;

/// One thing the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move { from: i8, to: i8 },
    Undo,
    New,
    Board,
    Moves,
    Help,
    Quit,
}

/// Parse one line of input
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let text = line.trim().to_ascii_lowercase();
    if text.is_empty() {
        return Err(InputError::Empty);
    }

    match text.as_str() {
        "undo" | "u" => return Ok(Command::Undo),
        "new" | "n" => return Ok(Command::New),
        "board" | "b" => return Ok(Command::Board),
        "moves" | "m" => return Ok(Command::Moves),
        "help" | "h" | "?" => return Ok(Command::Help),
        "quit" | "q" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    let squares: String = text.chars().filter(|c| !c.is_whitespace() && *c != '-').collect();
    if squares.len() != 4 || !squares.is_ascii() {
        return Err(InputError::UnknownCommand(line.trim().to_string()));
    }
    let from = algebraic_to_position(&squares[..2])?;
    let to = algebraic_to_position(&squares[2..])?;
    Ok(Command::Move { from, to })
}

fn is_square(token: &str) -> bool {
    algebraic_to_position(token).is_ok()
}

/// Split a script into command lines
///
/// Entries are separated by whitespace, commas, semicolons or newlines. Two
/// bare squares in a row form one move, so `"e2 e4 e7 e5"` and `"e2e4, e7e5"`
/// give the same two entries.
pub fn split_script(script: &str) -> Vec<String> {
    let tokens: Vec<&str> = script
        .split(|c: char| c.is_whitespace() || c == ',' || c == ';')
        .filter(|token| !token.is_empty())
        .collect();

    let mut entries = Vec::with_capacity(tokens.len());
    let mut i = 0;
    while i < tokens.len() {
        if i + 1 < tokens.len() && is_square(tokens[i]) && is_square(tokens[i + 1]) {
            entries.push(format!("{}{}", tokens[i], tokens[i + 1]));
            i += 2;
        } else {
            entries.push(tokens[i].to_string());
            i += 1;
        }
    }
    entries
}
