//! Viewer configuration
//!
//! Which character and skin the viewer plays, and how. Stored as RON:
//!
//! ```ron
//! (
//!     sprite_root: "Sprites",
//!     character: "ken",
//!     skin: "default",
//!     frame_rate: 12,
//! )
//! ```
//!
//! Every field is optional.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::animation::{DEFAULT_FRAME_RATE, IDLE_STATE};
use crate::physics::DEFAULT_GROUND_Y;

/// Config file looked up when none is given on the command line
pub const DEFAULT_CONFIG_FILE: &str = "sprite-reel.ron";

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    SerializeError(ron::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl From<ron::Error> for ConfigError {
    fn from(e: ron::Error) -> Self {
        ConfigError::SerializeError(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::SerializeError(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// What the viewer shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Directory holding `<character>/<skin>/<animation>/` folders
    pub sprite_root: PathBuf,
    pub character: String,
    pub skin: String,
    /// Frames per second for every animation of the skin
    pub frame_rate: u32,
    pub looping: bool,
    /// State to start on when the skin has no idle animation
    pub default_state: String,
    /// Initial playback speed multiplier
    pub speed: f32,
    /// Floor line in screen pixels
    pub ground_y: f32,
    /// Sprite draw scale
    pub scale: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            sprite_root: PathBuf::from("Sprites"),
            character: "ken".to_string(),
            skin: "default".to_string(),
            frame_rate: DEFAULT_FRAME_RATE,
            looping: true,
            default_state: IDLE_STATE.to_string(),
            speed: 1.0,
            ground_y: DEFAULT_GROUND_Y,
            scale: 2.0,
        }
    }
}

impl ViewerConfig {
    pub fn from_ron(s: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(s)?)
    }

    pub fn to_ron(&self) -> Result<String, ConfigError> {
        let config = ron::ser::PrettyConfig::new().indentor("  ".to_string());
        Ok(ron::ser::to_string_pretty(self, config)?)
    }

    /// Read a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_ron(&contents)
    }

    /// Read `path` if it exists, defaults otherwise. Parse errors are
    /// reported, not swallowed.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::info!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        fs::write(path, self.to_ron()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_partial_ron() {
        let config = ViewerConfig::from_ron(r#"(character: "ryu", frame_rate: 8)"#).unwrap();
        assert_eq!(config.character, "ryu");
        assert_eq!(config.frame_rate, 8);
        assert_eq!(config.skin, "default");
        assert!(config.looping);
    }

    #[test]
    fn test_bad_ron_is_parse_error() {
        let result = ViewerConfig::from_ron("(frame_rate: \"fast\")");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ViewerConfig::load_or_default(&dir.path().join("none.ron")).unwrap();
        assert_eq!(config, ViewerConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("viewer.ron");
        let config = ViewerConfig {
            skin: "gold".to_string(),
            speed: 0.5,
            ..Default::default()
        };
        config.save(&path).unwrap();
        assert_eq!(ViewerConfig::load(&path).unwrap(), config);
    }
}
