//! Resource Module
//!
//! Sprite loading for characters laid out on disk as:
//!
//! ```text
//! <root>/<character>/<skin>/<animation>/<frame>.png
//! ```
//!
//! Frame files are played in file-name order. Decoding goes through the
//! `FrameLoader` trait so the discovery and caching logic runs without a GPU
//! (tests use a fake loader; the game uses `TextureLoader`).

mod discover;
mod loader;
mod manager;

use std::fmt;
use std::path::{Path, PathBuf};

pub use discover::{discover_animations, discover_skins, is_frame_file, AnimationFiles, SkinFiles};
pub use loader::TextureLoader;
pub use manager::ResourceManager;

/// Error type for resource operations
#[derive(Debug)]
pub enum ResourceError {
    /// File I/O error
    Io(String),
    /// Image could not be decoded
    Decode { path: PathBuf, message: String },
    /// Expected file or directory is missing
    NotFound(PathBuf),
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceError::Io(msg) => write!(f, "I/O error: {}", msg),
            ResourceError::Decode { path, message } => {
                write!(f, "Failed to decode {}: {}", path.display(), message)
            }
            ResourceError::NotFound(path) => write!(f, "Not found: {}", path.display()),
        }
    }
}

impl std::error::Error for ResourceError {}

impl From<std::io::Error> for ResourceError {
    fn from(e: std::io::Error) -> Self {
        ResourceError::Io(e.to_string())
    }
}

/// Turns image files into frame handles.
pub trait FrameLoader {
    /// Handle type stored in frame sequences
    type Frame: Clone;

    /// Decode one image file
    fn load(&mut self, path: &Path) -> Result<Self::Frame, ResourceError>;

    /// Stand-in frame for images that failed to load
    fn placeholder(&mut self) -> Self::Frame;
}
