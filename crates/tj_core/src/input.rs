//! Keyboard state with level-triggered (`is_held`) and edge-triggered
//! (`is_just_pressed` / `is_just_released`) queries.
//!
//! Edge state survives until `end_frame()`, which the main loop calls only
//! after a fixed step has consumed it, so a tap landing on a frame with zero
//! simulation steps is not lost.

use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Escape,
    Space,
}

#[derive(Debug, Default)]
pub struct InputState {
    held: HashSet<Key>,
    just_pressed: HashSet<Key>,
    just_released: HashSet<Key>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        if self.held.insert(key) {
            self.just_pressed.insert(key);
        }
    }

    pub fn key_up(&mut self, key: Key) {
        if self.held.remove(&key) {
            self.just_released.insert(key);
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn is_just_pressed(&self, key: Key) -> bool {
        self.just_pressed.contains(&key)
    }

    pub fn is_just_released(&self, key: Key) -> bool {
        self.just_released.contains(&key)
    }

    /// Held state for a key that was tapped and released within one frame
    /// still needs to reach the simulation, so a just-pressed key counts too.
    pub fn is_down(&self, key: Key) -> bool {
        self.is_held(key) || self.is_just_pressed(key)
    }

    /// Drops every held key, e.g. when the window loses focus and the
    /// matching release events will never arrive.
    pub fn release_all(&mut self) {
        for key in self.held.drain() {
            self.just_released.insert(key);
        }
    }

    pub fn end_frame(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }
}
