//! Settings persistence
//!
//! Saves and loads [`GameSettings`] to/from a JSON file. Provides automatic
//! persistence of user preferences across application sessions.
//!
//! # File Location
//!
//! Settings are stored in `settings.json` in the user's configuration
//! directory (via `directories::ProjectDirs`), falling back to the working
//! directory if no config directory can be resolved.
//!
//! # Error Handling
//!
//! Both load and save operations handle errors gracefully:
//! - Load failures fall back to default settings
//! - Save failures are logged but don't interrupt gameplay

use crate::core::error::SettingsResult;
use bevy::prelude::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// User-tunable preferences
///
/// Loaded on startup and saved whenever a value changes (the side panel
/// exposes the sliders/toggles that mutate this resource).
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    /// Fixed "thinking" delay before the computer opponent picks its move
    pub ai_think_seconds: f32,

    /// Duration of the piece glide animation for the computer's move
    pub move_anim_seconds: f32,

    /// Whether new games start with the threat overlay enabled
    pub threat_overlay_default: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            ai_think_seconds: 0.75,
            move_anim_seconds: 0.25,
            threat_overlay_default: false,
        }
    }
}

/// Helper to resolve the settings file path
fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("io", "clickchess", "ClickChess") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Read settings from a JSON file
fn read_settings(path: &Path) -> SettingsResult<GameSettings> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Write settings to a JSON file, creating parent directories as needed
fn write_settings(path: &Path, settings: &GameSettings) -> SettingsResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load settings from file on startup
///
/// Attempts to load settings from the system config directory. If the file
/// doesn't exist or is invalid, uses default settings. This system should run
/// early in the startup schedule so settings are available to other systems.
pub fn load_settings_system(mut commands: Commands) {
    let path = settings_path();

    if path.exists() {
        match read_settings(&path) {
            Ok(settings) => {
                info!("[SETTINGS] Loaded settings from {:?}", path);
                commands.insert_resource(settings);
                return;
            }
            Err(e) => {
                warn!(
                    "[SETTINGS] Failed to load settings from {:?}: {}. Using defaults.",
                    path, e
                );
            }
        }
    } else {
        info!("[SETTINGS] No settings file at {:?}. Using defaults.", path);
    }

    commands.insert_resource(GameSettings::default());
}

/// Save settings to file when they change
pub fn save_settings_system(settings: Res<GameSettings>) {
    if !settings.is_changed() {
        return;
    }

    let path = settings_path();
    match write_settings(&path, &settings) {
        Ok(()) => debug!("[SETTINGS] Saved settings to {:?}", path),
        Err(e) => error!("[SETTINGS] Failed to save settings to {:?}: {}", path, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_roundtrip() {
        let dir = std::env::temp_dir().join("clickchess-settings-test");
        let path = dir.join(SETTINGS_FILENAME);

        let settings = GameSettings {
            ai_think_seconds: 1.5,
            move_anim_seconds: 0.4,
            threat_overlay_default: true,
        };
        write_settings(&path, &settings).unwrap();
        let loaded = read_settings(&path).unwrap();
        assert_eq!(loaded, settings);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let path = std::env::temp_dir().join("clickchess-no-such-settings.json");
        assert!(read_settings(&path).is_err());
    }
}
