//! Driver settings persistence
//!
//! Saves and loads [`DriverSettings`] to/from a JSON file in the user's
//! configuration directory.
//!
//! # Error Handling
//!
//! - Load failures fall back to default settings
//! - Save failures are returned to the caller, which decides whether they
//!   matter

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::DriverResult;

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// What the session prints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverSettings {
    /// Print the board after every accepted move
    pub show_board: bool,
    /// Print the move list after every accepted move
    pub show_move_log: bool,
    /// Print the pieces taken so far after every accepted move
    pub show_captured: bool,
    /// Prompt shown before reading a line in interactive mode
    pub prompt: String,
}

impl Default for DriverSettings {
    fn default() -> Self {
        Self {
            show_board: true,
            show_move_log: false,
            show_captured: false,
            prompt: "> ".to_string(),
        }
    }
}

/// Path to `settings.json` in the user's configuration directory
///
/// E.g. `~/.config/xfchess-rules/settings.json` on Linux. Falls back to a local
/// `settings.json` if the system config dir cannot be found.
pub fn default_settings_path() -> PathBuf {
    match ProjectDirs::from("com", "trilltino", "xfchess-rules") {
        Some(dirs) => dirs.config_dir().join(SETTINGS_FILENAME),
        None => PathBuf::from(SETTINGS_FILENAME),
    }
}

/// Load settings from `path`, using defaults if the file is missing or invalid
pub fn load_settings(path: &Path) -> DriverSettings {
    if !path.exists() {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
        return DriverSettings::default();
    }

    match fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str::<DriverSettings>(&contents) {
            Ok(settings) => {
                info!("[SETTINGS] Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("[SETTINGS] Failed to parse settings file at {:?}: {}. Using defaults.", path, e);
                DriverSettings::default()
            }
        },
        Err(e) => {
            warn!("[SETTINGS] Failed to read settings file at {:?}: {}. Using defaults.", path, e);
            DriverSettings::default()
        }
    }
}

/// Write `settings` to `path` as pretty JSON, creating the directory if needed
pub fn save_settings(settings: &DriverSettings, path: &Path) -> DriverResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}
