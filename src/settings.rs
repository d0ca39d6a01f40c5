//! User settings
//!
//! Plain key-value JSON next to the executable. Unknown keys are ignored and
//! missing keys take their defaults, so old and new settings files both
//! load. A corrupt file is replaced with defaults rather than blocking
//! startup.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default settings file name
pub const SETTINGS_FILE: &str = "game_settings.json";

/// Resolution the UI layout is designed for
pub const BASE_RESOLUTION: (u32, u32) = (1280, 720);

/// Smallest font size `scale_font_size` will return
const MIN_FONT_SIZE: u16 = 8;

/// Error type for settings persistence
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

/// Persisted user preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// 0.0 - 1.0
    pub music_volume: f32,
    /// 0.0 - 1.0
    pub sound_volume: f32,
    pub fullscreen: bool,
    /// [width, height]
    pub resolution: [u32; 2],
    pub language: String,
    /// Global animation playback multiplier
    pub animation_speed: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            music_volume: 0.5,
            sound_volume: 0.7,
            fullscreen: false,
            resolution: [BASE_RESOLUTION.0, BASE_RESOLUTION.1],
            language: "Русский".to_string(),
            animation_speed: 1.0,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Loads, saves and applies settings
#[derive(Debug, Clone)]
pub struct SettingsManager {
    path: PathBuf,
    pub settings: Settings,
    scale_factor: f32,
}

impl SettingsManager {
    /// Load settings from `path`.
    ///
    /// A missing file is created with defaults; an unreadable or corrupt one
    /// is overwritten with defaults. Write failures are logged, never fatal.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let settings = match Self::read(&path) {
            Ok(Some(settings)) => {
                log::info!("Settings loaded from {}", path.display());
                Some(settings)
            }
            Ok(None) => None,
            Err(e) => {
                log::warn!("Failed to load settings from {}: {}", path.display(), e);
                None
            }
        };

        let loaded = settings.is_some();
        let mut manager = Self {
            path,
            settings: settings.unwrap_or_default(),
            scale_factor: 1.0,
        };
        manager.update_scale_factor(manager.settings.resolution[0]);

        if !loaded {
            manager.save_or_warn();
        }
        manager
    }

    /// Read settings without touching the file. Missing or corrupt files
    /// yield defaults.
    pub fn peek(path: impl AsRef<Path>) -> Settings {
        Self::read(path.as_ref()).ok().flatten().unwrap_or_default()
    }

    /// `Ok(None)` when the file does not exist
    fn read(path: &Path) -> Result<Option<Settings>, SettingsError> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(path)?;
        Ok(Some(Settings::from_json(&contents)?))
    }

    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, self.settings.to_json()?)?;
        Ok(())
    }

    fn save_or_warn(&self) {
        if let Err(e) = self.save() {
            log::warn!("Failed to save settings to {}: {}", self.path.display(), e);
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Change the language and persist immediately
    pub fn set_language(&mut self, language: &str) {
        self.settings.language = language.to_string();
        self.save_or_warn();
    }

    /// Change the resolution, recompute UI scale and persist
    pub fn set_resolution(&mut self, width: u32, height: u32) {
        self.settings.resolution = [width, height];
        self.update_scale_factor(width);
        self.save_or_warn();
    }

    /// UI scale relative to `BASE_RESOLUTION` width
    pub fn update_scale_factor(&mut self, current_width: u32) -> f32 {
        self.scale_factor = current_width as f32 / BASE_RESOLUTION.0 as f32;
        self.scale_factor
    }

    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    /// Scale a layout value designed for the base resolution
    pub fn scale_value(&self, value: f32) -> f32 {
        (value * self.scale_factor).trunc()
    }

    /// Scale a font size, never below a readable minimum
    pub fn scale_font_size(&self, size: u16) -> u16 {
        ((size as f32 * self.scale_factor) as u16).max(MIN_FONT_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{"fullscreen": true, "unknown_key": 3}"#).unwrap();
        assert!(settings.fullscreen);
        assert_eq!(settings.music_volume, 0.5);
        assert_eq!(settings.resolution, [1280, 720]);
    }

    #[test]
    fn test_default_language() {
        assert_eq!(Settings::default().language, "Русский");
        let settings = Settings::from_json(r#"{"music_volume": 0.1}"#).unwrap();
        assert_eq!(settings.language, "Русский");
    }

    #[test]
    fn test_peek_does_not_write() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.json");
        assert_eq!(SettingsManager::peek(&missing), Settings::default());
        assert!(!missing.exists());

        let corrupt = dir.path().join("corrupt.json");
        std::fs::write(&corrupt, "{ not json").unwrap();
        assert_eq!(SettingsManager::peek(&corrupt), Settings::default());
        assert_eq!(std::fs::read_to_string(&corrupt).unwrap(), "{ not json");

        let saved = dir.path().join("saved.json");
        std::fs::write(&saved, r#"{"fullscreen": true}"#).unwrap();
        assert!(SettingsManager::peek(&saved).fullscreen);
    }

    #[test]
    fn test_missing_file_is_created() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");

        let manager = SettingsManager::load(&path);
        assert_eq!(manager.settings, Settings::default());
        assert!(path.exists());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/settings.json");

        let mut manager = SettingsManager::load(&path);
        manager.settings.sound_volume = 0.25;
        manager.set_language("Deutsch");

        let reloaded = SettingsManager::load(&path);
        assert_eq!(reloaded.settings.language, "Deutsch");
        assert_eq!(reloaded.settings.sound_volume, 0.25);
    }

    #[test]
    fn test_corrupt_file_reset_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        let manager = SettingsManager::load(&path);
        assert_eq!(manager.settings, Settings::default());

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(Settings::from_json(&contents).is_ok());
    }

    #[test]
    fn test_scaling() {
        let dir = TempDir::new().unwrap();
        let mut manager = SettingsManager::load(dir.path().join("s.json"));
        assert_eq!(manager.scale_factor(), 1.0);

        manager.set_resolution(640, 360);
        assert_eq!(manager.scale_factor(), 0.5);
        assert_eq!(manager.scale_value(101.0), 50.0);
        assert_eq!(manager.scale_font_size(24), 12);
        assert_eq!(manager.scale_font_size(10), 8);
    }
}
