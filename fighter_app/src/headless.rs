//! Headless platform for driving the loop without a window
//!
//! Runs a fixed input script against a synthetic 60 fps clock and counts
//! draw calls instead of issuing them. A real frontend (SDL, glfw + a 2D
//! renderer) implements the same two traits.

use square_engine::prelude::*;

/// Synthetic counter rate, 1 MHz for comfortable tick resolution
const CLOCK_FREQUENCY: u64 = 1_000_000;

/// Counter ticks per simulated 60 fps frame
const FRAME_STEP: u64 = CLOCK_FREQUENCY / 60;

/// Scripted stand-in for the windowing/input layer
pub struct ScriptedPlatform {
    frame: u64,
    max_frames: u64,
    now: u64,
    quit_sent: bool,
}

impl ScriptedPlatform {
    /// Run the script for `max_frames` frames, then send a quit event
    #[must_use]
    pub const fn new(max_frames: u64) -> Self {
        Self {
            frame: 0,
            max_frames,
            now: 0,
            quit_sent: false,
        }
    }

    /// Frames produced so far
    #[must_use]
    pub const fn frames(&self) -> u64 {
        self.frame
    }
}

impl Platform for ScriptedPlatform {
    fn poll_event(&mut self) -> Option<PlatformEvent> {
        if !self.quit_sent && self.frame >= self.max_frames {
            self.quit_sent = true;
            return Some(PlatformEvent::Quit);
        }
        // The loop drains events exactly once per frame; an empty queue is
        // the frame boundary, so the clock advances here.
        self.frame += 1;
        self.now += FRAME_STEP;
        None
    }

    fn keyboard(&self) -> KeySnapshot {
        let mut keys = KeySnapshot::new();
        // Sweep right, then down, then left again
        match self.frame % 360 {
            0..=119 => keys.set(KeyCode::Right, true),
            120..=239 => keys.set(KeyCode::Down, true),
            _ => keys.set(KeyCode::Left, true),
        }
        // Tap fire twice a second; held for one frame only, so each tap is
        // a clean press edge
        if self.frame % 30 == 0 {
            keys.set(KeyCode::Space, true);
        }
        keys
    }

    fn now(&self) -> u64 {
        self.now
    }

    fn clock_frequency(&self) -> u64 {
        CLOCK_FREQUENCY
    }
}

/// Draw surface that counts calls instead of rasterizing
#[derive(Debug, Default)]
pub struct NullSurface {
    /// Frames presented
    pub presents: u64,
    /// Textured rectangles drawn
    pub sprites: u64,
    /// Debug overlay segments drawn
    pub lines: u64,
}

impl DrawSurface for NullSurface {
    fn clear(&mut self, _color: Color) {}

    fn fill_rect(&mut self, _rect: Rect, _color: Color) {}

    fn textured_rect(&mut self, _texture: TextureId, _dest: Rect, _angle_degrees: f32) {
        self.sprites += 1;
    }

    fn line(&mut self, _from: (f32, f32), _to: (f32, f32), _color: Color) {
        self.lines += 1;
    }

    fn present(&mut self) {
        self.presents += 1;
    }
}
