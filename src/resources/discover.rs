//! Sprite directory discovery
//!
//! Pure filesystem walking: finds skins, animations and their frame files
//! without decoding anything.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::ResourceError;

/// Animation name -> frame files in play order
pub type AnimationFiles = BTreeMap<String, Vec<PathBuf>>;

/// Skin name -> its animations
pub type SkinFiles = BTreeMap<String, AnimationFiles>;

/// Image extensions accepted as frames
const FRAME_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Check whether a path looks like a frame image (case-insensitive extension)
pub fn is_frame_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| FRAME_EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e)))
        .unwrap_or(false)
}

/// Immediate subdirectories of `dir`, sorted by name
fn subdirectories(dir: &Path) -> Result<Vec<(String, PathBuf)>, ResourceError> {
    let mut dirs: Vec<(String, PathBuf)> = std::fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_dir())
        .filter_map(|e| {
            let name = e.file_name().into_string().ok()?;
            Some((name, e.path()))
        })
        .collect();
    dirs.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(dirs)
}

/// Find every animation folder under `dir`.
///
/// Each subdirectory is an animation; its frame files are sorted by file
/// name. Animations with no frames are left out.
pub fn discover_animations(dir: &Path) -> Result<AnimationFiles, ResourceError> {
    let mut animations = AnimationFiles::new();

    for (name, path) in subdirectories(dir)? {
        let mut frames: Vec<PathBuf> = std::fs::read_dir(&path)?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.is_file() && is_frame_file(p))
            .collect();
        frames.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        if !frames.is_empty() {
            animations.insert(name, frames);
        }
    }

    Ok(animations)
}

/// Find every skin of `character` under `root`.
///
/// A missing character directory is not an error: the character simply has
/// no skins. Skins without any animation are left out.
pub fn discover_skins(root: &Path, character: &str) -> Result<SkinFiles, ResourceError> {
    let char_dir = root.join(character);
    if !char_dir.is_dir() {
        log::warn!("Character directory not found: {}", char_dir.display());
        return Ok(SkinFiles::new());
    }

    let mut skins = SkinFiles::new();
    for (skin, path) in subdirectories(&char_dir)? {
        let animations = discover_animations(&path)?;
        if !animations.is_empty() {
            skins.insert(skin, animations);
        }
    }

    log::debug!("Discovered {} skins for {}", skins.len(), character);
    Ok(skins)
}
