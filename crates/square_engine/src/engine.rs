//! Game loop orchestration
//!
//! One thread owns the whole frame: drain events, sample input, integrate
//! movement, run the fixed physics tick when due, decay bullet lifetimes,
//! render. Nothing overlaps and nothing suspends except the present call.

use thiserror::Error;

use crate::assets::{AssetError, TextureStore};
use crate::config::{ConfigError, GameConfig};
use crate::foundation::time::{FixedStepScheduler, FrameClock};
use crate::input::InputState;
use crate::physics::{PhysicsBridge, UnitScale};
use crate::platform::{Color, DrawSurface, KeyCode, Platform, PlatformEvent};
use crate::scene::{tiled_blocks, Entity, EntityPool, EntityRef, Scene};

/// Loop state; `Stopped` is terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Frames are being produced
    Running,
    /// A quit signal or escape was observed; the loop exits at the frame
    /// boundary
    Stopped,
}

/// Top-level driver composing input, gameplay, physics, and rendering
pub struct GameLoop {
    config: GameConfig,
    textures: TextureStore,
    scene: Scene,
    physics: PhysicsBridge,
    scheduler: FixedStepScheduler,
    clock: FrameClock,
    input: InputState,
    state: RunState,
}

impl GameLoop {
    /// Build the scene, load required textures, and register physics bodies
    ///
    /// Any failure here is fatal: the prototype cannot run without its
    /// window, clock, or textures.
    pub fn new(config: GameConfig, platform: &impl Platform) -> Result<Self, SetupError> {
        log::info!("Setting up game loop...");

        let mut textures = TextureStore::new();
        let player_tex = textures.load(&config.player.texture)?;
        let bullet_tex = textures.load(&config.bullets.texture)?;
        let block_tex = textures.load(&config.blocks.texture)?;

        let player = Entity::new(
            textures.get(player_tex),
            config.player.spawn.0,
            config.player.spawn.1,
        );
        let bullets = EntityPool::new(
            config.bullets.capacity,
            textures.get(bullet_tex),
            config.bullets.ttl,
        );
        let blocks = tiled_blocks(
            textures.get(block_tex),
            config.blocks.origin,
            config.blocks.columns,
            config.blocks.rows,
            config.blocks.spacing,
        );
        let mut scene = Scene {
            player,
            bullets,
            blocks,
        };

        let mut physics = PhysicsBridge::new(
            config.simulation.gravity,
            UnitScale::new(config.simulation.pixels_per_unit),
        );
        if config.blocks.physics_bodies {
            for (i, block) in scene.blocks.iter_mut().enumerate() {
                physics.register_body(
                    EntityRef::Block(i),
                    block,
                    config.blocks.body_kind,
                    config.blocks.material,
                );
            }
            log::info!("Registered {} block bodies", scene.blocks.len());
        }

        let frequency = platform.clock_frequency();
        let now = platform.now();
        Ok(Self {
            scheduler: FixedStepScheduler::new(frequency, config.simulation.tick_rate, now),
            clock: FrameClock::new(frequency),
            input: InputState::new(),
            state: RunState::Running,
            config,
            textures,
            scene,
            physics,
        })
    }

    /// Run frames until a quit signal or escape stops the loop
    pub fn run(&mut self, platform: &mut impl Platform, surface: &mut impl DrawSurface) {
        log::info!("Starting main loop...");
        while self.state == RunState::Running {
            self.frame(platform, surface);
        }
        log::info!("Main loop stopped");
    }

    /// Produce one frame
    ///
    /// The stop check happens at the frame boundary: a quit observed here
    /// still finishes the current frame.
    pub fn frame(&mut self, platform: &mut impl Platform, surface: &mut impl DrawSurface) {
        // 1. Drain pending window events
        while let Some(event) = platform.poll_event() {
            match event {
                PlatformEvent::Quit => self.state = RunState::Stopped,
            }
        }

        // 2. Sample the keyboard for this frame
        self.input.begin_frame(platform.keyboard());
        if self.input.is_pressed(KeyCode::Escape) {
            self.state = RunState::Stopped;
        }

        // 3. Wall-clock delta for this frame
        let delta = self.clock.delta(platform.now());

        // 4. Continuous movement, clamped to the playfield per axis
        let dir_x = f32::from(self.input.is_pressed(KeyCode::Right))
            - f32::from(self.input.is_pressed(KeyCode::Left));
        let dir_y = f32::from(self.input.is_pressed(KeyCode::Down))
            - f32::from(self.input.is_pressed(KeyCode::Up));
        let bounds = (self.config.window.width, self.config.window.height);
        let speed = self.config.player.speed;
        self.scene
            .player
            .move_clamped(dir_x * speed * delta, dir_y * speed * delta, bounds);

        // 5. Edge-triggered shoot: fires only on the press transition
        if self.input.just_pressed(KeyCode::Space) {
            let (cx, cy) = self.scene.player.center();
            if self.scene.bullets.spawn(cx, cy).is_none() {
                log::warn!("bullet pool exhausted, dropping shot");
            }
        }

        // 6. Fixed physics tick, at most once per frame
        if self.scheduler.is_tick_due(platform.now()) {
            let period = self.scheduler.tick_period();
            self.physics.step(period, &mut self.scene);
        }

        // 7. Bullet lifetimes decay on the render clock, not the tick clock
        self.scene.bullets.tick(delta);

        // 8. Render everything enabled
        self.render(surface);

        // 9. Keep this frame's keys for next frame's edge detection
        self.input.end_frame();
    }

    fn render(&mut self, surface: &mut impl DrawSurface) {
        let (r, g, b) = self.config.window.clear_color;
        surface.clear(Color::rgb(r, g, b));

        for block in self.scene.blocks.iter().filter(|e| e.enabled) {
            surface.textured_rect(block.texture, block.draw_rect(), block.angle);
        }
        for bullet in self.scene.bullets.iter().filter(|e| e.enabled) {
            surface.textured_rect(bullet.texture, bullet.draw_rect(), bullet.angle);
        }
        if self.scene.player.enabled {
            let p = &self.scene.player;
            surface.textured_rect(p.texture, p.draw_rect(), p.angle);
        }

        if self.config.debug.physics_overlay {
            self.physics.draw_debug(surface);
        }

        surface.present();
    }

    /// Current loop state
    #[must_use]
    pub const fn state(&self) -> RunState {
        self.state
    }

    /// Whether the loop will produce another frame
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Request a stop at the next frame boundary
    pub fn stop(&mut self) {
        self.state = RunState::Stopped;
    }

    /// The live scene
    #[must_use]
    pub const fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The physics bridge
    #[must_use]
    pub const fn physics(&self) -> &PhysicsBridge {
        &self.physics
    }

    /// The texture store backing the scene
    #[must_use]
    pub const fn textures(&self) -> &TextureStore {
        &self.textures
    }
}

/// Fatal setup-time failures
#[derive(Error, Debug)]
pub enum SetupError {
    /// A required texture could not be loaded
    #[error("Asset setup failed: {0}")]
    Asset(#[from] AssetError),

    /// The configuration file could not be read or parsed
    #[error("Configuration failed: {0}")]
    Config(#[from] ConfigError),
}
