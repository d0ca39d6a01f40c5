//! SPRITE-REEL: frame-sequence animation for a 2D fighting game
//!
//! The core is a small time-to-frame player:
//! - `FrameClock` turns elapsed seconds into whole frame steps
//! - `FrameSequence` walks an ordered list of frames, looping or clamping
//! - `AnimationController` switches between named sequences
//!
//! Around it sit the pieces a game needs to actually show those frames:
//! sprite discovery and caching, a tiny physics layer, scene dispatch,
//! persisted settings and the viewer scene used by the binary.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod animation;
pub mod config;
pub mod input;
pub mod physics;
pub mod resources;
pub mod scene;
pub mod settings;
pub mod viewer;

pub use animation::{AnimationCache, AnimationController, FrameClock, FrameSequence};
pub use scene::{Scene, SceneManager};
