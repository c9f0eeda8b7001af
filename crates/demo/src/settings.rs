//! Demo preferences, stored as JSON in the per-user data directory.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};
use ui::ThemeMode;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Settings {
    pub theme: ThemeMode,
}

fn settings_file_path() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "SlidingMenu", "SlidingMenuDemo")
        .context("could not determine the app data directory")?;
    Ok(proj_dirs.data_dir().join("settings.json"))
}

impl Settings {
    /// A missing file yields the defaults; any other failure is returned
    /// for the caller to log and shrug off.
    pub fn load() -> Result<Self> {
        let path = settings_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let json = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn save(&self) -> Result<()> {
        let path = settings_file_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_light_theme() {
        assert_eq!(Settings::default().theme, ThemeMode::Light);
    }

    #[test]
    fn round_trips_the_selected_mode() {
        let json = serde_json::to_string(&Settings {
            theme: ThemeMode::Dark,
        })
        .unwrap();
        let parsed: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.theme, ThemeMode::Dark);
    }
}
