//! Bodies and the world that steps them

use macroquad::math::Vec2;

use super::aabb::Aabb;
use super::{DEFAULT_GROUND_Y, GRAVITY};

/// How a body reacts to gravity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gravity {
    /// Never accelerated (projectiles, cameos, UI props)
    Ignored,
    /// Accelerated while airborne; landing clears the flag
    Affected { airborne: bool },
}

/// A moving box: characters, projectiles, props
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub rect: Aabb,
    /// Pixels per second
    pub velocity: Vec2,
    pub facing_right: bool,
    pub gravity: Gravity,
}

impl Body {
    /// Grounded body that falls when launched
    pub fn new(rect: Aabb) -> Self {
        Self {
            rect,
            velocity: Vec2::ZERO,
            facing_right: true,
            gravity: Gravity::Affected { airborne: false },
        }
    }

    /// Body that ignores gravity entirely
    pub fn floating(rect: Aabb) -> Self {
        Self {
            gravity: Gravity::Ignored,
            ..Self::new(rect)
        }
    }

    pub fn is_airborne(&self) -> bool {
        matches!(self.gravity, Gravity::Affected { airborne: true })
    }

    /// Kick the body upward. Ignored for bodies without gravity.
    /// Returns true if the body left the ground.
    pub fn launch(&mut self, upward_speed: f32) -> bool {
        match &mut self.gravity {
            Gravity::Affected { airborne } => {
                *airborne = true;
                self.velocity.y = -upward_speed;
                true
            }
            Gravity::Ignored => false,
        }
    }

    /// Move by velocity * dt
    pub fn integrate(&mut self, dt: f32) {
        self.rect.x += self.velocity.x * dt;
        self.rect.y += self.velocity.y * dt;
    }
}

/// Handle to a body inside a [`PhysicsWorld`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(usize);

/// Gravity, integration and ground clamping for a set of bodies
#[derive(Debug, Clone)]
pub struct PhysicsWorld {
    pub gravity: f32,
    pub ground_y: f32,
    /// Removed bodies leave a hole so other ids stay valid
    bodies: Vec<Option<Body>>,
}

impl PhysicsWorld {
    pub fn new(gravity: f32, ground_y: f32) -> Self {
        Self {
            gravity,
            ground_y,
            bodies: Vec::new(),
        }
    }

    pub fn add(&mut self, body: Body) -> BodyId {
        if let Some(slot) = self.bodies.iter().position(Option::is_none) {
            self.bodies[slot] = Some(body);
            BodyId(slot)
        } else {
            self.bodies.push(Some(body));
            BodyId(self.bodies.len() - 1)
        }
    }

    pub fn remove(&mut self, id: BodyId) -> Option<Body> {
        self.bodies.get_mut(id.0).and_then(Option::take)
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.0).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Number of live bodies
    pub fn len(&self) -> usize {
        self.bodies.iter().filter(|b| b.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Gravity, then integration, then ground clamp
    pub fn step(&mut self, dt: f32) {
        let gravity = self.gravity;
        let ground_y = self.ground_y;

        for body in self.bodies.iter_mut().flatten() {
            if body.is_airborne() {
                body.velocity.y += gravity * dt;
            }
            body.integrate(dt);

            if body.rect.bottom() >= ground_y {
                body.rect.set_bottom(ground_y);
                body.velocity.y = 0.0;
                if let Gravity::Affected { airborne } = &mut body.gravity {
                    *airborne = false;
                }
            }
        }
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new(GRAVITY, DEFAULT_GROUND_Y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_airborne_body_falls() {
        let mut world = PhysicsWorld::default();
        let mut body = Body::new(Aabb::new(0.0, 100.0, 32.0, 64.0));
        body.launch(0.0);
        let id = world.add(body);

        world.step(0.1);
        let body = world.get(id).unwrap();
        // v = 1500 * 0.1 = 150, y += 150 * 0.1 = 15
        assert!((body.velocity.y - 150.0).abs() < 0.001);
        assert!((body.rect.y - 115.0).abs() < 0.001);
        assert!(body.is_airborne());
    }

    #[test]
    fn test_grounded_body_does_not_accelerate() {
        let mut world = PhysicsWorld::default();
        let id = world.add(Body::new(Aabb::new(0.0, 100.0, 32.0, 64.0)));
        world.step(0.5);
        let body = world.get(id).unwrap();
        assert_eq!(body.velocity.y, 0.0);
        assert_eq!(body.rect.y, 100.0);
    }

    #[test]
    fn test_floating_body_ignores_gravity() {
        let mut world = PhysicsWorld::default();
        let mut body = Body::floating(Aabb::new(0.0, 0.0, 8.0, 8.0));
        body.velocity = Vec2::new(100.0, 0.0);
        assert!(!body.launch(500.0));
        let id = world.add(body);

        world.step(0.5);
        let body = world.get(id).unwrap();
        assert_eq!(body.rect.x, 50.0);
        assert_eq!(body.rect.y, 0.0);
    }

    #[test]
    fn test_landing_clamps_to_ground() {
        let mut world = PhysicsWorld::new(GRAVITY, 500.0);
        let mut body = Body::new(Aabb::new(0.0, 420.0, 32.0, 64.0));
        body.launch(0.0);
        body.velocity.y = 400.0;
        let id = world.add(body);

        world.step(0.1);
        let body = world.get(id).unwrap();
        assert_eq!(body.rect.bottom(), 500.0);
        assert_eq!(body.velocity.y, 0.0);
        assert!(!body.is_airborne());
    }

    #[test]
    fn test_jump_arc_returns_to_ground() {
        let mut world = PhysicsWorld::default();
        let id = world.add(Body::new(Aabb::new(0.0, 436.0, 32.0, 64.0)));
        world.get_mut(id).unwrap().launch(600.0);

        let mut peak = f32::MAX;
        for _ in 0..120 {
            world.step(1.0 / 60.0);
            peak = peak.min(world.get(id).unwrap().rect.y);
        }
        let body = world.get(id).unwrap();
        assert!(peak < 436.0);
        assert!(!body.is_airborne());
        assert_eq!(body.rect.bottom(), 500.0);
    }

    #[test]
    fn test_remove_reuses_slot() {
        let mut world = PhysicsWorld::default();
        let a = world.add(Body::new(Aabb::default()));
        let b = world.add(Body::new(Aabb::default()));
        assert!(world.remove(a).is_some());
        assert!(world.get(a).is_none());
        assert_eq!(world.len(), 1);

        let c = world.add(Body::new(Aabb::default()));
        assert_eq!(c, a);
        assert!(world.get(b).is_some());
    }
}
