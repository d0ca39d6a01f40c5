//! Animation Controller
//!
//! Named animation states (idle, walk, punch...) with exactly one active at
//! a time. Switching to the state that is already playing does nothing, so
//! callers can request "idle" every frame while a key is held without the
//! animation restarting and stuttering.

use std::collections::HashMap;

use super::sequence::FrameSequence;

/// Switches between named, independently timed frame sequences.
#[derive(Debug, Clone)]
pub struct AnimationController<F> {
    states: HashMap<String, FrameSequence<F>>,
    /// Always a key of `states` when set
    active: Option<String>,
    /// Multiplier applied to dt before it reaches the active sequence
    speed: f32,
}

impl<F> AnimationController<F> {
    /// Empty controller with nothing playing and speed 1.0
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
            active: None,
            speed: 1.0,
        }
    }

    /// Build from existing states.
    ///
    /// A `default` that names no registered state is ignored.
    pub fn with_states(
        states: HashMap<String, FrameSequence<F>>,
        default: Option<&str>,
        speed: f32,
    ) -> Self {
        let active = default
            .filter(|name| states.contains_key(*name))
            .map(str::to_string);
        Self { states, active, speed }
    }

    /// Register (or replace) a state
    pub fn add(&mut self, name: impl Into<String>, sequence: FrameSequence<F>) {
        self.states.insert(name.into(), sequence);
    }

    /// Switch the active state.
    ///
    /// Unknown names and the already-active name are ignored. When `reset` is
    /// true the newly active sequence restarts from frame 0. Returns whether
    /// the active state changed.
    pub fn change(&mut self, name: &str, reset: bool) -> bool {
        if self.active.as_deref() == Some(name) {
            return false;
        }
        let Some(sequence) = self.states.get_mut(name) else {
            return false;
        };
        if reset {
            sequence.reset();
        }
        self.active = Some(name.to_string());
        true
    }

    /// Advance the active sequence by `dt * speed` seconds
    pub fn advance(&mut self, dt: f32) {
        let speed = self.speed;
        if let Some(sequence) = self.active_mut() {
            sequence.advance(dt * speed);
        }
    }

    /// Current frame of the active sequence
    pub fn current_frame(&self) -> Option<&F> {
        self.active().and_then(|sequence| sequence.current_frame())
    }

    /// Store a new playback speed. Not validated: zero or negative values
    /// freeze the animation.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Name of the playing state
    pub fn active_state(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// The playing sequence
    pub fn active(&self) -> Option<&FrameSequence<F>> {
        self.active.as_ref().and_then(|name| self.states.get(name))
    }

    pub fn active_mut(&mut self) -> Option<&mut FrameSequence<F>> {
        match &self.active {
            Some(name) => self.states.get_mut(name),
            None => None,
        }
    }

    pub fn get(&self, name: &str) -> Option<&FrameSequence<F>> {
        self.states.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    /// Registered state names, sorted
    pub fn state_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.states.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl<F> Default for AnimationController<F> {
    fn default() -> Self {
        Self::new()
    }
}
