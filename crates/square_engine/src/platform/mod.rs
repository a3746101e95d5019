//! Platform abstraction layer
//!
//! The window, renderer, and input device are external collaborators: the
//! core never talks to a graphics library directly, it talks to these
//! traits. A frontend (SDL, glfw, a headless test harness) implements them.

use crate::assets::TextureId;

/// Events drained from the windowing layer once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformEvent {
    /// The window manager asked the process to quit
    Quit,
}

/// Key codes sampled by the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Space key (fire)
    Space,
    /// Escape key (quit)
    Escape,
}

impl KeyCode {
    /// Number of tracked keys
    pub const COUNT: usize = 6;

    /// Dense index into a [`KeySnapshot`]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
            Self::Up => 2,
            Self::Down => 3,
            Self::Space => 4,
            Self::Escape => 5,
        }
    }
}

/// One frame's keyboard state, sampled as a whole
///
/// Snapshots are plain values so the loop can keep the previous frame's
/// snapshot around for edge detection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeySnapshot {
    pressed: [bool; KeyCode::COUNT],
}

impl KeySnapshot {
    /// Empty snapshot (no keys pressed)
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pressed: [false; KeyCode::COUNT],
        }
    }

    /// Mark a key as pressed or released
    pub fn set(&mut self, key: KeyCode, pressed: bool) {
        self.pressed[key.index()] = pressed;
    }

    /// Builder-style variant of [`Self::set`], handy for scripted input
    #[must_use]
    pub const fn with(mut self, key: KeyCode) -> Self {
        self.pressed[key.index()] = true;
        self
    }

    /// Whether the key was down when this snapshot was taken
    #[must_use]
    pub const fn is_pressed(&self, key: KeyCode) -> bool {
        self.pressed[key.index()]
    }
}

/// RGBA color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel
    pub a: u8,
}

impl Color {
    /// Opaque color from RGB components
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }
}

/// Axis-aligned pixel rectangle (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Left edge in pixels
    pub x: i32,
    /// Top edge in pixels
    pub y: i32,
    /// Width in pixels
    pub w: u32,
    /// Height in pixels
    pub h: u32,
}

/// Windowing, input, and clock surface
///
/// `now`/`clock_frequency` are the monotonic high-resolution counter pair;
/// all loop timing is expressed in these raw ticks so a test harness can
/// feed synthetic time.
pub trait Platform {
    /// Drain one pending event, `None` when the queue is empty
    fn poll_event(&mut self) -> Option<PlatformEvent>;

    /// Sample the whole keyboard for this frame
    fn keyboard(&self) -> KeySnapshot;

    /// Current monotonic counter value
    fn now(&self) -> u64;

    /// Counter ticks per second
    fn clock_frequency(&self) -> u64;
}

/// 2D drawing surface
///
/// `present` blits the finished frame and performs the (blocking) wait for
/// the display refresh; it is the only call in the loop that may suspend.
pub trait DrawSurface {
    /// Fill the whole surface with a color
    fn clear(&mut self, color: Color);

    /// Fill a rectangle with a solid color
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw a texture into `dest`, rotated around its center
    fn textured_rect(&mut self, texture: TextureId, dest: Rect, angle_degrees: f32);

    /// Draw a line between two pixel-space points (debug overlay)
    fn line(&mut self, from: (f32, f32), to: (f32, f32), color: Color);

    /// Present the finished frame
    fn present(&mut self);
}
