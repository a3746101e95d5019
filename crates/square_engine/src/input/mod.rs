//! Input state tracking
//!
//! Keeps the current and previous frame's keyboard snapshots so actions can
//! be either level-triggered (movement while held) or edge-triggered
//! (shoot on the frame the key goes down, not every frame it stays down).

use crate::platform::{KeyCode, KeySnapshot};

/// Two-frame keyboard state
#[derive(Debug, Default)]
pub struct InputState {
    current: KeySnapshot,
    previous: KeySnapshot,
}

impl InputState {
    /// Create an input state with nothing pressed
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install this frame's keyboard sample
    pub fn begin_frame(&mut self, snapshot: KeySnapshot) {
        self.current = snapshot;
    }

    /// Rotate the current snapshot into "previous" for the next frame
    pub fn end_frame(&mut self) {
        self.previous = self.current;
    }

    /// Whether the key is down this frame
    #[must_use]
    pub const fn is_pressed(&self, key: KeyCode) -> bool {
        self.current.is_pressed(key)
    }

    /// Whether the key went down this frame (was up the previous frame)
    #[must_use]
    pub const fn just_pressed(&self, key: KeyCode) -> bool {
        self.current.is_pressed(key) && !self.previous.is_pressed(key)
    }
}
