//! Entity record
//!
//! Passive data: position, size, rotation, lifetime flags, and an optional
//! back-reference to a physics body. Entities never own engine resources;
//! textures live in the [`TextureStore`](crate::assets::TextureStore) and
//! bodies in the [`PhysicsBridge`](crate::physics::PhysicsBridge).

use crate::assets::{Texture, TextureId};
use crate::physics::BodyKey;
use crate::platform::Rect;

/// A drawable, optionally simulated game object
#[derive(Debug, Clone)]
pub struct Entity {
    /// Draw origin (top-left), integer pixels
    pub x: i32,
    /// Draw origin (top-left), integer pixels
    pub y: i32,
    /// Subpixel accumulator for x; the integer position is derived from it
    pub fx: f32,
    /// Subpixel accumulator for y
    pub fy: f32,
    /// Width in pixels, fixed at creation from the texture
    pub width: u32,
    /// Height in pixels, fixed at creation from the texture
    pub height: u32,
    /// Rotation in degrees; mirrors the physics body when one is bound
    pub angle: f32,
    /// Participates in update and draw
    pub enabled: bool,
    /// Time-based lifetime decay applies
    pub dynamic: bool,
    /// TTL countdown is armed
    pub ttl_enabled: bool,
    /// Remaining lifetime in seconds, clamped at 0
    pub ttl: f32,
    /// Texture drawn for this entity
    pub texture: TextureId,
    /// Physics body bound to this entity, if registered
    pub body: Option<BodyKey>,
}

impl Entity {
    /// Create an enabled, non-simulated entity sized to the texture's
    /// native pixels
    #[must_use]
    pub fn new(texture: &Texture, x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            fx: x as f32,
            fy: y as f32,
            width: texture.width,
            height: texture.height,
            angle: 0.0,
            enabled: true,
            dynamic: false,
            ttl_enabled: false,
            ttl: 0.0,
            texture: texture.id,
            body: None,
        }
    }

    /// Place the entity, syncing the subpixel accumulators
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.fx = x;
        self.fy = y;
        self.x = x as i32;
        self.y = y as i32;
    }

    /// Pixel-space center
    #[must_use]
    pub fn center(&self) -> (f32, f32) {
        (
            self.fx + self.width as f32 / 2.0,
            self.fy + self.height as f32 / 2.0,
        )
    }

    /// Place the entity by its center, re-deriving the top-left draw origin
    pub fn set_center(&mut self, cx: f32, cy: f32) {
        self.set_position(
            cx - self.width as f32 / 2.0,
            cy - self.height as f32 / 2.0,
        );
    }

    /// Accumulate movement, clamped per axis to the playfield
    ///
    /// Clamping is independent per axis and never wraps or bounces.
    pub fn move_clamped(&mut self, dx: f32, dy: f32, bounds: (u32, u32)) {
        let max_x = bounds.0.saturating_sub(self.width) as f32;
        let max_y = bounds.1.saturating_sub(self.height) as f32;
        self.fx = (self.fx + dx).clamp(0.0, max_x);
        self.fy = (self.fy + dy).clamp(0.0, max_y);
        self.x = self.fx as i32;
        self.y = self.fy as i32;
    }

    /// Decay the TTL by `delta` seconds
    ///
    /// Only enabled, dynamic entities with an armed countdown decay. On
    /// crossing zero the TTL clamps to 0, the countdown disarms, and the
    /// entity is disabled (which recycles a pooled slot).
    pub fn tick_ttl(&mut self, delta: f32) {
        if !(self.enabled && self.dynamic && self.ttl_enabled) {
            return;
        }
        self.ttl -= delta;
        if self.ttl <= 0.0 {
            self.ttl = 0.0;
            self.ttl_enabled = false;
            self.enabled = false;
        }
    }

    /// Destination rectangle for drawing
    #[must_use]
    pub const fn draw_rect(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            w: self.width,
            h: self.height,
        }
    }
}
