//! Resource manager
//!
//! Owns every loaded frame handle. Images are cached by path, per-character
//! skin layouts by character name, and per-animation frame lists in an
//! `AnimationCache`. Controllers built from here share handles but get their
//! own playback state.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::animation::{AnimationCache, AnimationController, IDLE_STATE};

use super::discover::{discover_skins, SkinFiles};
use super::{FrameLoader, ResourceError};

/// Loads and caches sprite frames for characters under one root directory
pub struct ResourceManager<L: FrameLoader> {
    root: PathBuf,
    loader: L,
    images: HashMap<PathBuf, L::Frame>,
    skins: HashMap<String, SkinFiles>,
    animations: AnimationCache<L::Frame>,
}

/// Load through the image cache, falling back to the placeholder.
/// Failures are not cached so a fixed file is picked up on the next call.
fn load_cached<L: FrameLoader>(
    loader: &mut L,
    images: &mut HashMap<PathBuf, L::Frame>,
    path: &Path,
) -> L::Frame {
    if let Some(frame) = images.get(path) {
        return frame.clone();
    }
    match loader.load(path) {
        Ok(frame) => {
            images.insert(path.to_path_buf(), frame.clone());
            frame
        }
        Err(e) => {
            log::warn!("{}; using placeholder", e);
            loader.placeholder()
        }
    }
}

/// Cache key for one animation of one skin
fn animation_key(character: &str, skin: &str, animation: &str) -> String {
    format!("{}/{}/{}", character, skin, animation)
}

impl<L: FrameLoader> ResourceManager<L> {
    pub fn new(root: impl Into<PathBuf>, loader: L) -> Self {
        Self {
            root: root.into(),
            loader,
            images: HashMap::new(),
            skins: HashMap::new(),
            animations: AnimationCache::new(),
        }
    }

    /// Load one image, cached by path. Missing or broken files yield the
    /// loader's placeholder.
    pub fn load_image(&mut self, path: &Path) -> L::Frame {
        load_cached(&mut self.loader, &mut self.images, path)
    }

    /// Discover (once) every skin of `character`
    pub fn load_character(&mut self, character: &str) -> Result<&SkinFiles, ResourceError> {
        if !self.skins.contains_key(character) {
            let skins = discover_skins(&self.root, character)?;
            log::info!("Loaded {} skins for {}", skins.len(), character);
            self.skins.insert(character.to_string(), skins);
        }
        Ok(&self.skins[character])
    }

    /// Skin names of `character`, sorted
    pub fn skin_names(&mut self, character: &str) -> Result<Vec<String>, ResourceError> {
        Ok(self.load_character(character)?.keys().cloned().collect())
    }

    /// Frames of one animation, loading them on first use
    pub fn animation_frames(
        &mut self,
        character: &str,
        skin: &str,
        animation: &str,
    ) -> Result<&[L::Frame], ResourceError> {
        self.load_character(character)?;

        let Self { root, loader, images, skins, animations } = self;
        let key = animation_key(character, skin, animation);
        animations.get_or_load(&key, |_| {
            let paths = skins
                .get(character)
                .and_then(|s| s.get(skin))
                .and_then(|a| a.get(animation))
                .ok_or_else(|| ResourceError::NotFound(root.join(character).join(skin).join(animation)))?;
            Ok(paths.iter().map(|p| load_cached(loader, images, p)).collect())
        })
    }

    /// Single frame of an animation, if it exists
    pub fn frame(&mut self, character: &str, skin: &str, animation: &str, index: usize) -> Option<L::Frame> {
        self.animation_frames(character, skin, animation)
            .ok()
            .and_then(|frames| frames.get(index).cloned())
    }

    /// Build a controller holding every animation of a skin.
    ///
    /// All sequences share `frame_rate` and `looping`. The controller starts
    /// on `idle` when the skin has one, otherwise nothing plays.
    pub fn build_controller(
        &mut self,
        character: &str,
        skin: &str,
        frame_rate: u32,
        looping: bool,
    ) -> Result<AnimationController<L::Frame>, ResourceError> {
        let names: Option<Vec<String>> = self
            .load_character(character)?
            .get(skin)
            .map(|animations| animations.keys().cloned().collect());
        let Some(names) = names else {
            return Err(ResourceError::NotFound(self.root.join(character).join(skin)));
        };

        let mut controller = AnimationController::new();
        for name in names {
            self.animation_frames(character, skin, &name)?;
            let key = animation_key(character, skin, &name);
            if let Some(sequence) = self.animations.sequence(&key, frame_rate, looping) {
                controller.add(name, sequence);
            }
        }
        controller.change(IDLE_STATE, true);

        log::debug!(
            "Built controller for {}/{} with {} states",
            character,
            skin,
            controller.len()
        );
        Ok(controller)
    }

    /// Drop cached frames so the next request reloads from disk
    pub fn invalidate_character(&mut self, character: &str) {
        if let Some(skins) = self.skins.remove(character) {
            for (skin, animations) in &skins {
                for (animation, paths) in animations {
                    self.animations.invalidate(&animation_key(character, skin, animation));
                    for path in paths {
                        self.images.remove(path);
                    }
                }
            }
        }
    }

    /// Number of distinct images held
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    pub fn animation_cache(&self) -> &AnimationCache<L::Frame> {
        &self.animations
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }
}
