//! Input handling
//!
//! Keyboard keys map to a small set of viewer actions. Scenes receive
//! `InputEvent`s instead of polling macroquad directly, which keeps them
//! testable without a window.

use macroquad::prelude::*;

/// Everything the viewer can be asked to do
///
/// Key mappings:
/// - Right / Left = next / previous animation state
/// - Up / Down = faster / slower playback
/// - 0 = playback speed back to 1.0
/// - R = restart the current state
/// - P = pause
/// - Space = jump
/// - F = flip facing
/// - Escape = quit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    NextState,
    PrevState,
    SpeedUp,
    SpeedDown,
    ResetSpeed,
    Restart,
    TogglePause,
    Jump,
    Flip,
    Quit,
}

impl Action {
    /// Every action, in display order
    pub const ALL: [Action; 10] = [
        Action::NextState,
        Action::PrevState,
        Action::SpeedUp,
        Action::SpeedDown,
        Action::ResetSpeed,
        Action::Restart,
        Action::TogglePause,
        Action::Jump,
        Action::Flip,
        Action::Quit,
    ];

    /// Keys bound to this action
    pub fn keys(self) -> &'static [KeyCode] {
        match self {
            Action::NextState => &[KeyCode::Right, KeyCode::D],
            Action::PrevState => &[KeyCode::Left, KeyCode::A],
            Action::SpeedUp => &[KeyCode::Up, KeyCode::Equal],
            Action::SpeedDown => &[KeyCode::Down, KeyCode::Minus],
            Action::ResetSpeed => &[KeyCode::Key0],
            Action::Restart => &[KeyCode::R],
            Action::TogglePause => &[KeyCode::P],
            Action::Jump => &[KeyCode::Space, KeyCode::W],
            Action::Flip => &[KeyCode::F],
            Action::Quit => &[KeyCode::Escape],
        }
    }

    /// Short label for the help overlay
    pub fn label(self) -> &'static str {
        match self {
            Action::NextState => "Next state",
            Action::PrevState => "Prev state",
            Action::SpeedUp => "Faster",
            Action::SpeedDown => "Slower",
            Action::ResetSpeed => "Speed 1x",
            Action::Restart => "Restart",
            Action::TogglePause => "Pause",
            Action::Jump => "Jump",
            Action::Flip => "Flip",
            Action::Quit => "Quit",
        }
    }

    /// Action bound to `key`, if any
    pub fn from_key(key: KeyCode) -> Option<Action> {
        Action::ALL.into_iter().find(|action| action.keys().contains(&key))
    }
}

/// Input delivered to the active scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Action key went down this frame
    Pressed(Action),
}

/// Collect this frame's key presses as events. Call once per frame.
pub fn poll_events() -> Vec<InputEvent> {
    Action::ALL
        .into_iter()
        .filter(|action| action.keys().iter().any(|key| is_key_pressed(*key)))
        .map(InputEvent::Pressed)
        .collect()
}
