//! Rigid-body physics bridge
//!
//! Wraps the rapier2d simulation behind a small registry keyed by
//! [`BodyKey`]: entities hold a non-owning key, the bridge owns the bodies,
//! and each fixed tick copies the simulated pose back into entity
//! pixel-space state.

pub mod bridge;

pub use bridge::PhysicsBridge;

use serde::{Deserialize, Serialize};

slotmap::new_key_type! {
    /// Non-owning handle from an entity to its physics binding
    pub struct BodyKey;
}

/// Rigid body behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyKind {
    /// Immovable (ground, fixed blocks)
    Static,
    /// Simulated under forces and gravity (movable boxes)
    Dynamic,
}

/// Surface and mass properties for a registered body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyMaterial {
    /// Coulomb friction coefficient
    pub friction: f32,
    /// Bounciness, 0 = inelastic
    pub restitution: f32,
    /// Mass density of the collider
    pub density: f32,
}

impl Default for BodyMaterial {
    fn default() -> Self {
        Self {
            friction: 0.5,
            restitution: 0.0,
            density: 1.0,
        }
    }
}

/// Fixed scale between pixel space (rendering) and physics units
///
/// The two conversions are exact inverses of one another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitScale {
    pixels_per_unit: f32,
}

impl UnitScale {
    /// Create a scale of `pixels_per_unit` pixels per physics unit
    #[must_use]
    pub const fn new(pixels_per_unit: f32) -> Self {
        Self { pixels_per_unit }
    }

    /// Pixel length to physics units
    #[must_use]
    pub fn to_units(self, pixels: f32) -> f32 {
        pixels / self.pixels_per_unit
    }

    /// Physics-unit length to pixels
    #[must_use]
    pub fn to_pixels(self, units: f32) -> f32 {
        units * self.pixels_per_unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_conversion_round_trip() {
        let scale = UnitScale::new(80.0);
        for p in [0.0_f32, 45.0, 800.0] {
            assert_relative_eq!(scale.to_pixels(scale.to_units(p)), p, max_relative = 1e-6);
        }
    }

    #[test]
    fn test_conversions_are_inverse_directions() {
        let scale = UnitScale::new(32.0);
        assert_relative_eq!(scale.to_units(64.0), 2.0);
        assert_relative_eq!(scale.to_pixels(2.0), 64.0);
    }
}
