//! Hitboxes (what hurts) and hurtboxes (what can be hurt)
//!
//! Both are offsets relative to an owning body. Hitboxes mirror with the
//! owner's facing so a punch box stays in front of the character.

use super::aabb::Aabb;
use super::world::Body;

/// Attack area in front of a body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitBox {
    pub offset_x: f32,
    pub offset_y: f32,
    pub w: f32,
    pub h: f32,
}

impl HitBox {
    pub fn new(offset_x: f32, offset_y: f32, w: f32, h: f32) -> Self {
        Self { offset_x, offset_y, w, h }
    }

    /// World-space box for `owner`
    pub fn rect(&self, owner: &Body) -> Aabb {
        let x = if owner.facing_right {
            owner.rect.x + self.offset_x
        } else {
            owner.rect.x - self.offset_x - self.w
        };
        Aabb::new(x, owner.rect.y + self.offset_y, self.w, self.h)
    }
}

/// Vulnerable area of a body. Without an explicit size it covers the
/// owner's whole rect.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HurtBox {
    pub offset_x: f32,
    pub offset_y: f32,
    pub size: Option<(f32, f32)>,
}

impl HurtBox {
    /// Matches the owner's body
    pub fn body() -> Self {
        Self::default()
    }

    pub fn new(offset_x: f32, offset_y: f32, w: f32, h: f32) -> Self {
        Self {
            offset_x,
            offset_y,
            size: Some((w, h)),
        }
    }

    /// World-space box for `owner`
    pub fn rect(&self, owner: &Body) -> Aabb {
        let (w, h) = self.size.unwrap_or((owner.rect.w, owner.rect.h));
        Aabb::new(owner.rect.x + self.offset_x, owner.rect.y + self.offset_y, w, h)
    }
}

/// Every (hitbox index, hurtbox index) pair that overlaps
pub fn detect_hits(
    attacker: &Body,
    hitboxes: &[HitBox],
    defender: &Body,
    hurtboxes: &[HurtBox],
) -> Vec<(usize, usize)> {
    let mut hits = Vec::new();
    for (hi, hitbox) in hitboxes.iter().enumerate() {
        let hit_rect = hitbox.rect(attacker);
        for (ui, hurtbox) in hurtboxes.iter().enumerate() {
            if hit_rect.overlaps(&hurtbox.rect(defender)) {
                hits.push((hi, ui));
            }
        }
    }
    hits
}
