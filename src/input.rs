//! Keyboard state tracking
//!
//! Collects winit key events into held/just-pressed sets and derives the
//! per-frame simulation input from them. Continuous direction signals are
//! recomputed from the held set every frame, so a released key stops the
//! paddle immediately; toggles fire once per physical key-down.

use winit::keyboard::KeyCode;

use crate::sim::TickInput;

/// Logical game keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
    ToggleAi,
    Quit,
}

const KEY_COUNT: usize = 6;

/// Map a physical key code to a logical game key
pub fn map_key(key_code: KeyCode) -> Option<Key> {
    match key_code {
        KeyCode::KeyW => Some(Key::LeftUp),
        KeyCode::KeyS => Some(Key::LeftDown),
        KeyCode::ArrowUp => Some(Key::RightUp),
        KeyCode::ArrowDown => Some(Key::RightDown),
        KeyCode::KeyT => Some(Key::ToggleAi),
        KeyCode::KeyQ => Some(Key::Quit),
        _ => None,
    }
}

/// Current keyboard state
#[derive(Debug, Default)]
pub struct InputState {
    held: [bool; KEY_COUNT],
    just_pressed: [bool; KEY_COUNT],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press. OS key repeats do not re-trigger edges.
    pub fn key_down(&mut self, key: Key, repeat: bool) {
        if !repeat && !self.held[key as usize] {
            self.just_pressed[key as usize] = true;
        }
        self.held[key as usize] = true;
    }

    pub fn key_up(&mut self, key: Key) {
        self.held[key as usize] = false;
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held[key as usize]
    }

    pub fn is_just_pressed(&self, key: Key) -> bool {
        self.just_pressed[key as usize]
    }

    /// Derive this frame's simulation input from the current key state
    pub fn frame_input(&self) -> TickInput {
        TickInput {
            left_axis: axis(self.is_held(Key::LeftUp), self.is_held(Key::LeftDown)),
            right_axis: axis(self.is_held(Key::RightUp), self.is_held(Key::RightDown)),
            toggle_ai: self.is_just_pressed(Key::ToggleAi),
            quit: self.is_just_pressed(Key::Quit),
        }
    }

    /// Clear edge-triggered state once the frame has consumed it
    pub fn end_frame(&mut self) {
        self.just_pressed = [false; KEY_COUNT];
    }
}

fn axis(up: bool, down: bool) -> f32 {
    let mut value = 0.0;
    if up {
        value += 1.0;
    }
    if down {
        value -= 1.0;
    }
    value
}
