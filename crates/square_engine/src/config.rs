//! Game configuration
//!
//! All tunables of the prototype in one serializable struct. Files may be
//! TOML or RON, chosen by extension; every section carries defaults that
//! reproduce the original prototype constants, so a partial file works.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::physics::{BodyKind, BodyMaterial};

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GameConfig {
    /// Window parameters (playfield bounds)
    pub window: WindowConfig,
    /// Fixed-step and unit-scale parameters
    pub simulation: SimulationConfig,
    /// Player entity parameters
    pub player: PlayerConfig,
    /// Bullet pool parameters
    pub bullets: BulletConfig,
    /// Block field parameters
    pub blocks: BlockConfig,
    /// Debug toggles
    pub debug: DebugConfig,
}

impl GameConfig {
    /// Load a configuration file, format chosen by extension
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path.extension().and_then(|e| e.to_str());
        if !matches!(extension, Some("toml" | "ron")) {
            return Err(ConfigError::UnsupportedFormat(path.display().to_string()));
        }
        let contents = std::fs::read_to_string(path)?;
        if extension == Some("toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        }
    }
}

/// Window parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Playfield width in pixels
    pub width: u32,
    /// Playfield height in pixels
    pub height: u32,
    /// Background clear color as RGB bytes
    pub clear_color: (u8, u8, u8),
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Squarefighter".to_string(),
            width: 800,
            height: 600,
            clear_color: (0x00, 0x80, 0x00),
        }
    }
}

/// Fixed-step and physics scale parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Physics ticks per second
    pub tick_rate: u32,
    /// Pixels per physics unit
    pub pixels_per_unit: f32,
    /// Gravity in pixel space (y-down)
    pub gravity: (f32, f32),
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_rate: 60,
            pixels_per_unit: 80.0,
            gravity: (0.0, 900.0),
        }
    }
}

/// Player entity parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Texture file (native dimensions become the player size)
    pub texture: String,
    /// Spawn position, top-left pixels
    pub spawn: (i32, i32),
    /// Movement speed in pixels per second
    pub speed: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            texture: "assets/player.png".to_string(),
            spawn: (200, 200),
            speed: 1000.0,
        }
    }
}

/// Bullet pool parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletConfig {
    /// Texture file
    pub texture: String,
    /// Pool capacity; spawns beyond this are dropped
    pub capacity: usize,
    /// Lifetime of a spawned bullet in seconds
    pub ttl: f32,
}

impl Default for BulletConfig {
    fn default() -> Self {
        Self {
            texture: "assets/bullet.png".to_string(),
            capacity: 32,
            ttl: 10.0,
        }
    }
}

/// Block field parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockConfig {
    /// Texture file
    pub texture: String,
    /// Top-left of the tiled layout
    pub origin: (i32, i32),
    /// Grid columns
    pub columns: u32,
    /// Grid rows
    pub rows: u32,
    /// Gap between tiles in pixels
    pub spacing: u32,
    /// Whether blocks get rigid bodies (decorative when false)
    pub physics_bodies: bool,
    /// Body type used when `physics_bodies` is set
    pub body_kind: BodyKind,
    /// Material used when `physics_bodies` is set
    pub material: BodyMaterial,
}

impl Default for BlockConfig {
    fn default() -> Self {
        Self {
            texture: "assets/block.png".to_string(),
            origin: (100, 400),
            columns: 8,
            rows: 2,
            spacing: 4,
            physics_bodies: true,
            body_kind: BodyKind::Static,
            material: BodyMaterial::default(),
        }
    }
}

/// Debug toggles
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DebugConfig {
    /// Outline physics colliders every frame
    pub physics_overlay: bool,
}

/// Configuration errors (fatal tier)
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Unsupported format
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}
