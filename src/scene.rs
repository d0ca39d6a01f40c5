//! Scene dispatch
//!
//! One scene is active at a time. The game loop hands it delta time, draw
//! calls and input; swapping scenes is a plain replacement.

use crate::input::InputEvent;

/// A screen of the game (menu, character select, viewer...)
///
/// Only `update` and `draw` are required; the rest default to doing nothing.
pub trait Scene {
    /// Called once when the scene becomes active
    fn start(&mut self) {}

    fn update(&mut self, dt: f32);

    fn draw(&self);

    fn handle_event(&mut self, _event: &InputEvent) {}

    /// True once the scene wants the game to exit
    fn wants_quit(&self) -> bool {
        false
    }
}

/// Holds the active scene and forwards loop calls to it
#[derive(Default)]
pub struct SceneManager {
    current: Option<Box<dyn Scene>>,
}

impl SceneManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active scene and start it
    pub fn set(&mut self, mut scene: Box<dyn Scene>) {
        scene.start();
        self.current = Some(scene);
    }

    /// Drop the active scene
    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn has_scene(&self) -> bool {
        self.current.is_some()
    }

    pub fn update(&mut self, dt: f32) {
        if let Some(scene) = self.current.as_mut() {
            scene.update(dt);
        }
    }

    pub fn draw(&self) {
        if let Some(scene) = self.current.as_ref() {
            scene.draw();
        }
    }

    pub fn handle_event(&mut self, event: &InputEvent) {
        if let Some(scene) = self.current.as_mut() {
            scene.handle_event(event);
        }
    }

    pub fn wants_quit(&self) -> bool {
        self.current.as_ref().map(|scene| scene.wants_quit()).unwrap_or(false)
    }
}
