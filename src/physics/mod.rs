//! Physics Module
//!
//! Just enough physics for sprites on a fighting-game stage:
//! - Gravity pulling airborne bodies down
//! - A flat ground line bodies cannot fall through
//! - Hitbox / hurtbox overlap tests
//!
//! Whether a body reacts to gravity is part of its data (`Gravity`), not
//! something discovered at runtime.

mod aabb;
mod hitbox;
mod world;

pub use aabb::Aabb;
pub use hitbox::{detect_hits, HitBox, HurtBox};
pub use world::{Body, BodyId, Gravity, PhysicsWorld};

/// Downward acceleration in pixels/s^2
pub const GRAVITY: f32 = 1500.0;

/// Y coordinate of the stage floor
pub const DEFAULT_GROUND_Y: f32 = 500.0;
