//! Runtime settings
//!
//! Only non-gameplay knobs live here; speeds, rates and durations are fixed
//! in [`crate::consts`]. Loaded from a JSON file, with any missing field
//! falling back to its default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PersistenceError;
use crate::persistence::load_json;

/// Default settings file, relative to the working directory
pub const DEFAULT_SETTINGS_PATH: &str = "settings.json";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Leaderboard JSON file
    pub leaderboard_path: PathBuf,
    /// Spawner seed for the first session (random if unset)
    pub seed: Option<u64>,
    /// Pace frames against the wall clock; false runs as fast as possible
    pub realtime: bool,

    // === Headless autopilot ===
    /// Name the autopilot enters on game over
    pub autopilot_name: String,
    /// Games the autopilot plays before quitting
    pub max_sessions: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            leaderboard_path: PathBuf::from("leaderboard.json"),
            seed: None,
            realtime: true,
            autopilot_name: "AUTO".to_string(),
            max_sessions: 3,
        }
    }
}

impl Settings {
    /// Load settings from `path`, or defaults if the file doesn't exist
    pub fn load(path: &Path) -> Result<Self, PersistenceError> {
        match load_json(path)? {
            Some(settings) => {
                log::info!("Loaded settings from {}", path.display());
                Ok(settings)
            }
            None => {
                log::warn!("No settings at {}, using defaults", path.display());
                Ok(Self::default())
            }
        }
    }
}
