//! Terminal driver for the chess rules engine
//!
//! Everything that talks to a user lives here: argument parsing, settings,
//! input parsing, text rendering and the session loop. The rules themselves
//! live in the `chess_rules` crate.

pub mod cli;
pub mod error;
pub mod input;
pub mod render;
pub mod session;
pub mod settings;

pub use cli::Cli;
pub use error::{DriverError, DriverResult, InputError};
pub use session::{Flow, Session};
pub use settings::{default_settings_path, load_settings, save_settings, DriverSettings};
