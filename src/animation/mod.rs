//! Animation Module
//!
//! Frame-by-frame sprite animation, built leaf first:
//! - FrameClock: accumulates delta time, emits whole frame steps
//! - FrameSequence: ordered frames driven by a clock (loop or clamp)
//! - AnimationController: named states, one active at a time
//! - AnimationCache: keyed frame lists shared between controllers
//!
//! Frames are generic handles. The game uses macroquad `Texture2D`, which is
//! a cheap reference to a GPU texture owned by the resource cache; tests use
//! plain integers or strings.
//!
//! Everything here is total: unknown state names, empty frame lists and
//! degenerate time values degrade to no-ops instead of errors.

mod cache;
mod clock;
mod controller;
mod draw;
mod sequence;

pub use cache::AnimationCache;
pub use clock::FrameClock;
pub use controller::AnimationController;
pub use draw::draw_frame;
pub use sequence::FrameSequence;

/// Frame rate used when a sprite folder carries no explicit rate
pub const DEFAULT_FRAME_RATE: u32 = 12;

/// State a freshly built character controller starts in, when present
pub const IDLE_STATE: &str = "idle";
