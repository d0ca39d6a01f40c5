//! Animation viewer scene
//!
//! Plays every animation of one character skin. The sprite stands on a
//! ground line, can jump under gravity, and states/speed are switched from
//! the keyboard. Playback logic is generic over the frame type; only drawing
//! needs real textures.

use macroquad::prelude::*;

use crate::animation::AnimationController;
use crate::config::ViewerConfig;
use crate::input::{Action, InputEvent};
use crate::physics::{Aabb, Body, BodyId, PhysicsWorld, GRAVITY};
use crate::scene::Scene;

/// Upward launch speed for a jump, pixels/s
pub const JUMP_SPEED: f32 = 700.0;

/// Speed change per key press
pub const SPEED_STEP: f32 = 0.25;

/// State played while airborne, when the skin has one
pub const JUMP_STATE: &str = "jump";

/// Viewer state and input handling
pub struct Viewer<F> {
    pub controller: AnimationController<F>,
    world: PhysicsWorld,
    body: BodyId,
    scale: f32,
    paused: bool,
    quit: bool,
    /// State to go back to after landing
    resume_state: Option<String>,
}

impl<F> Viewer<F> {
    /// `sprite_size` is the unscaled size of one frame.
    pub fn new(mut controller: AnimationController<F>, config: &ViewerConfig, sprite_size: (f32, f32)) -> Self {
        controller.set_speed(config.speed);
        if controller.active_state().is_none() && !controller.change(&config.default_state, true) {
            let first = controller.state_names().first().map(|name| name.to_string());
            if let Some(first) = first {
                controller.change(&first, true);
            }
        }

        let (w, h) = (sprite_size.0 * config.scale, sprite_size.1 * config.scale);
        let mut world = PhysicsWorld::new(GRAVITY, config.ground_y);
        let body = world.add(Body::new(Aabb::new(0.0, config.ground_y - h, w, h)));

        Self {
            controller,
            world,
            body,
            scale: config.scale,
            paused: false,
            quit: false,
            resume_state: None,
        }
    }

    pub fn body(&self) -> Option<&Body> {
        self.world.get(self.body)
    }

    /// Place the sprite horizontally (screen layout is the caller's job)
    pub fn set_x(&mut self, x: f32) {
        if let Some(body) = self.world.get_mut(self.body) {
            body.rect.x = x;
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Switch `offset` states forward (negative = backward), wrapping
    fn cycle_state(&mut self, offset: isize) {
        let names: Vec<String> = self.controller.state_names().iter().map(|n| n.to_string()).collect();
        if names.is_empty() {
            return;
        }
        let current = self
            .controller
            .active_state()
            .and_then(|active| names.iter().position(|n| n == active))
            .unwrap_or(0);
        let next = (current as isize + offset).rem_euclid(names.len() as isize) as usize;
        self.controller.change(&names[next], true);
        self.resume_state = None;
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::NextState => self.cycle_state(1),
            Action::PrevState => self.cycle_state(-1),
            Action::SpeedUp => {
                let speed = self.controller.speed() + SPEED_STEP;
                self.controller.set_speed(speed);
            }
            Action::SpeedDown => {
                let speed = (self.controller.speed() - SPEED_STEP).max(0.0);
                self.controller.set_speed(speed);
            }
            Action::ResetSpeed => self.controller.set_speed(1.0),
            Action::Restart => {
                if let Some(sequence) = self.controller.active_mut() {
                    sequence.reset();
                }
            }
            Action::TogglePause => self.paused = !self.paused,
            Action::Jump => self.jump(),
            Action::Flip => {
                if let Some(body) = self.world.get_mut(self.body) {
                    body.facing_right = !body.facing_right;
                }
            }
            Action::Quit => self.quit = true,
        }
    }

    fn jump(&mut self) {
        let launched = match self.world.get_mut(self.body) {
            Some(body) if !body.is_airborne() => body.launch(JUMP_SPEED),
            _ => false,
        };
        if !launched {
            return;
        }
        let previous = self.controller.active_state().map(str::to_string);
        if self.controller.change(JUMP_STATE, true) {
            self.resume_state = previous;
        }
    }

    pub fn tick(&mut self, dt: f32) {
        if self.paused {
            return;
        }
        self.world.step(dt);
        self.controller.advance(dt);

        let landed = self.body().map(|b| !b.is_airborne()).unwrap_or(true);
        if landed {
            if let Some(state) = self.resume_state.take() {
                self.controller.change(&state, true);
            }
        }
    }
}

impl Scene for Viewer<Texture2D> {
    fn start(&mut self) {
        log::info!(
            "Viewer started with {} states, playing {:?}",
            self.controller.len(),
            self.controller.active_state()
        );
    }

    fn update(&mut self, dt: f32) {
        self.tick(dt);
    }

    fn draw(&self) {
        clear_background(Color::from_rgba(24, 24, 32, 255));

        let ground_y = self.world.ground_y;
        draw_line(0.0, ground_y, screen_width(), ground_y, 2.0, DARKGRAY);

        if let Some(body) = self.body() {
            self.controller.draw(body.rect.x, body.rect.y, self.scale, !body.facing_right);
        }

        let state = self.controller.active_state().unwrap_or("-");
        let (index, len) = self
            .controller
            .active()
            .map(|s| (s.current_index().unwrap_or(0), s.len()))
            .unwrap_or((0, 0));
        let status = format!(
            "{}  frame {}/{}  speed {:.2}x  {} fps{}",
            state,
            index + 1,
            len,
            self.controller.speed(),
            get_fps(),
            if self.paused { "  [PAUSED]" } else { "" }
        );
        draw_text(&status, 16.0, 28.0, 24.0, WHITE);

        let mut y = 56.0;
        for action in Action::ALL {
            let key = action.keys().first().map(|k| format!("{:?}", k)).unwrap_or_default();
            draw_text(&format!("{:>8}  {}", key, action.label()), 16.0, y, 18.0, GRAY);
            y += 18.0;
        }
    }

    fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::Pressed(action) => self.apply(*action),
        }
    }

    fn wants_quit(&self) -> bool {
        self.quit
    }
}
