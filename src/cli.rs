//! Command line arguments

use std::path::PathBuf;

use clap::Parser;

/// Play chess from the terminal by typing coordinate moves (e2e4)
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "xfchess-rules", version, about)]
pub struct Cli {
    /// Moves and commands to run instead of reading stdin, e.g. "e2e4 e7e5 board"
    #[arg(long, value_name = "SCRIPT")]
    pub moves: Option<String>,

    /// Settings file to use instead of the one in the user config directory
    #[arg(long, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Write the effective settings back to the settings file
    #[arg(long)]
    pub write_settings: bool,

    /// Log filter, e.g. "debug" or "chess_rules=trace". Defaults to RUST_LOG, then "info"
    #[arg(long, value_name = "FILTER")]
    pub log: Option<String>,
}
