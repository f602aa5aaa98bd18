//! User preferences persistence.
//!
//! Stores user preferences in `~/.lapwatch/preferences.json`. Timer state
//! itself is never persisted; only cosmetic choices survive a restart.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Error type for preferences operations.
#[derive(Error, Debug)]
pub enum PreferencesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Could not determine home directory")]
    NoHomeDir,
}

/// User preferences.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Preferences {
    /// The selected theme ID.
    #[serde(default = "default_theme_id")]
    pub theme_id: String,
    /// The selected glyph set ID.
    #[serde(default = "default_glyphs_id")]
    pub glyphs_id: String,
}

fn default_theme_id() -> String {
    "default".to_string()
}

fn default_glyphs_id() -> String {
    "emoji".to_string()
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme_id: default_theme_id(),
            glyphs_id: default_glyphs_id(),
        }
    }
}

/// Get the preferences file path (`~/.lapwatch/preferences.json`).
pub fn preferences_path() -> Result<PathBuf, PreferencesError> {
    let home = dirs::home_dir().ok_or(PreferencesError::NoHomeDir)?;
    Ok(home.join(".lapwatch").join("preferences.json"))
}

/// Load preferences from disk.
///
/// Returns default preferences if the file doesn't exist or can't be read.
pub fn load_preferences() -> Preferences {
    let path = match preferences_path() {
        Ok(p) => p,
        Err(_) => return Preferences::default(),
    };

    if !path.exists() {
        return Preferences::default();
    }

    let contents = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(_) => return Preferences::default(),
    };

    serde_json::from_str(&contents).unwrap_or_default()
}

/// Save preferences to disk.
pub fn save_preferences(prefs: &Preferences) -> Result<(), PreferencesError> {
    let path = preferences_path()?;

    // Ensure the directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(prefs)?;
    std::fs::write(&path, json)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let prefs = Preferences::default();
        assert_eq!(prefs.theme_id, "default");
        assert_eq!(prefs.glyphs_id, "emoji");
    }

    #[test]
    fn test_missing_fields_fall_back() {
        // older preference files without glyphs_id still load
        let prefs: Preferences = serde_json::from_str(r#"{"theme_id":"dark"}"#).unwrap();
        assert_eq!(prefs.theme_id, "dark");
        assert_eq!(prefs.glyphs_id, "emoji");
    }
}
