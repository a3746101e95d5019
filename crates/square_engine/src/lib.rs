//! # Square Engine
//!
//! Fixed-timestep entity/physics core for the Squarefighter prototype: a
//! player square moves and shoots, bullets come from a bounded pool, and
//! blocks ride a rigid-body simulation.
//!
//! The window, renderer, and texture upload are external collaborators
//! behind the [`platform`] traits; the crate owns the parts with actual
//! design tension: the variable-rate frame loop, the fixed-rate physics
//! tick, and the entity/body synchronization between them.
//!
//! ```rust,no_run
//! use square_engine::prelude::*;
//! # struct MyPlatform;
//! # struct MySurface;
//! # impl Platform for MyPlatform {
//! #     fn poll_event(&mut self) -> Option<PlatformEvent> { None }
//! #     fn keyboard(&self) -> KeySnapshot { KeySnapshot::new() }
//! #     fn now(&self) -> u64 { 0 }
//! #     fn clock_frequency(&self) -> u64 { 1000 }
//! # }
//! # impl DrawSurface for MySurface {
//! #     fn clear(&mut self, _: Color) {}
//! #     fn fill_rect(&mut self, _: Rect, _: Color) {}
//! #     fn textured_rect(&mut self, _: TextureId, _: Rect, _: f32) {}
//! #     fn line(&mut self, _: (f32, f32), _: (f32, f32), _: Color) {}
//! #     fn present(&mut self) {}
//! # }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut platform = MyPlatform;
//!     let mut surface = MySurface;
//!     let config = GameConfig::default();
//!     let mut game = GameLoop::new(config, &platform)?;
//!     game.run(&mut platform, &mut surface);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]

pub mod assets;
pub mod config;
pub mod foundation;
pub mod input;
pub mod physics;
pub mod platform;
pub mod scene;

mod engine;

pub use engine::{GameLoop, RunState, SetupError};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        assets::{Texture, TextureId, TextureStore},
        config::{ConfigError, GameConfig},
        foundation::time::{FixedStepScheduler, FrameClock},
        input::InputState,
        physics::{BodyKey, BodyKind, BodyMaterial, PhysicsBridge, UnitScale},
        platform::{
            Color, DrawSurface, KeyCode, KeySnapshot, Platform, PlatformEvent, Rect,
        },
        scene::{Entity, EntityPool, EntityRef, Scene},
        GameLoop, RunState, SetupError,
    };
}
