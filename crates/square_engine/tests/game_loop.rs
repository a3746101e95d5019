//! Frame-level tests driving the full loop with a scripted platform

use std::collections::VecDeque;
use std::path::PathBuf;

use square_engine::prelude::*;

/// Platform with a hand-advanced clock and scripted input
struct ScriptedPlatform {
    frequency: u64,
    now: u64,
    keys: KeySnapshot,
    events: VecDeque<PlatformEvent>,
}

impl ScriptedPlatform {
    fn new(frequency: u64) -> Self {
        Self {
            frequency,
            now: 0,
            keys: KeySnapshot::new(),
            events: VecDeque::new(),
        }
    }

    fn advance_secs(&mut self, secs: f64) {
        self.now += (secs * self.frequency as f64).round() as u64;
    }
}

impl Platform for ScriptedPlatform {
    fn poll_event(&mut self) -> Option<PlatformEvent> {
        self.events.pop_front()
    }

    fn keyboard(&self) -> KeySnapshot {
        self.keys
    }

    fn now(&self) -> u64 {
        self.now
    }

    fn clock_frequency(&self) -> u64 {
        self.frequency
    }
}

/// Surface that only counts draw calls
#[derive(Default)]
struct CountingSurface {
    clears: usize,
    textured: usize,
    lines: usize,
    presents: usize,
}

impl DrawSurface for CountingSurface {
    fn clear(&mut self, _color: Color) {
        self.clears += 1;
    }

    fn fill_rect(&mut self, _rect: Rect, _color: Color) {}

    fn textured_rect(&mut self, _texture: TextureId, _dest: Rect, _angle_degrees: f32) {
        self.textured += 1;
    }

    fn line(&mut self, _from: (f32, f32), _to: (f32, f32), _color: Color) {
        self.lines += 1;
    }

    fn present(&mut self) {
        self.presents += 1;
    }
}

fn fixture_png(name: &str, w: u32, h: u32) -> PathBuf {
    let path = std::env::temp_dir().join(format!("square_engine_it_{name}"));
    image::RgbaImage::new(w, h).save(&path).expect("fixture png");
    path
}

fn test_config() -> GameConfig {
    let mut cfg = GameConfig::default();
    cfg.player.texture = fixture_png("player.png", 32, 32).display().to_string();
    cfg.bullets.texture = fixture_png("bullet.png", 8, 8).display().to_string();
    cfg.blocks.texture = fixture_png("block.png", 64, 32).display().to_string();
    cfg
}

#[test]
fn missing_texture_is_fatal() {
    let mut cfg = test_config();
    cfg.player.texture = "/nonexistent/player.png".to_string();
    let platform = ScriptedPlatform::new(1000);
    assert!(matches!(
        GameLoop::new(cfg, &platform),
        Err(SetupError::Asset(_))
    ));
}

#[test]
fn movement_scenario_matches_prototype() {
    // 800x600 world, 32x32 player at (200,200), 1000 px/s, right for 0.1 s
    let mut platform = ScriptedPlatform::new(1000);
    let mut surface = CountingSurface::default();
    let mut game = GameLoop::new(test_config(), &platform).expect("setup");

    // First frame establishes the clock baseline
    game.frame(&mut platform, &mut surface);
    assert_eq!(game.scene().player.x, 200);

    platform.keys = KeySnapshot::new().with(KeyCode::Right);
    platform.advance_secs(0.1);
    game.frame(&mut platform, &mut surface);
    assert_eq!(game.scene().player.x, 300);
}

#[test]
fn movement_clamps_at_playfield_edges() {
    let mut platform = ScriptedPlatform::new(1000);
    let mut surface = CountingSurface::default();
    let mut game = GameLoop::new(test_config(), &platform).expect("setup");
    game.frame(&mut platform, &mut surface);

    platform.keys = KeySnapshot::new().with(KeyCode::Left);
    for _ in 0..30 {
        platform.advance_secs(0.1);
        game.frame(&mut platform, &mut surface);
    }
    assert_eq!(game.scene().player.x, 0);

    platform.keys = KeySnapshot::new().with(KeyCode::Right);
    for _ in 0..30 {
        platform.advance_secs(0.1);
        game.frame(&mut platform, &mut surface);
    }
    assert_eq!(game.scene().player.x, 800 - 32);
}

#[test]
fn held_fire_key_spawns_exactly_one_bullet() {
    let mut platform = ScriptedPlatform::new(1000);
    let mut surface = CountingSurface::default();
    let mut game = GameLoop::new(test_config(), &platform).expect("setup");

    platform.keys = KeySnapshot::new().with(KeyCode::Space);
    for _ in 0..2 {
        platform.advance_secs(1.0 / 60.0);
        game.frame(&mut platform, &mut surface);
    }
    assert_eq!(game.scene().bullets.live(), 1);

    // Release and press again: the edge re-arms
    platform.keys = KeySnapshot::new();
    platform.advance_secs(1.0 / 60.0);
    game.frame(&mut platform, &mut surface);
    platform.keys = KeySnapshot::new().with(KeyCode::Space);
    platform.advance_secs(1.0 / 60.0);
    game.frame(&mut platform, &mut surface);
    assert_eq!(game.scene().bullets.live(), 2);
}

#[test]
fn exhausted_pool_drops_the_shot() {
    let mut cfg = test_config();
    cfg.bullets.capacity = 1;
    let mut platform = ScriptedPlatform::new(1000);
    let mut surface = CountingSurface::default();
    let mut game = GameLoop::new(cfg, &platform).expect("setup");

    for _ in 0..3 {
        platform.keys = KeySnapshot::new().with(KeyCode::Space);
        platform.advance_secs(0.01);
        game.frame(&mut platform, &mut surface);
        platform.keys = KeySnapshot::new();
        platform.advance_secs(0.01);
        game.frame(&mut platform, &mut surface);
    }
    // Two of the three shots were dropped; the loop kept running
    assert_eq!(game.scene().bullets.live(), 1);
    assert!(game.is_running());
}

#[test]
fn bullet_ttl_runs_on_wall_clock() {
    let mut cfg = test_config();
    cfg.bullets.ttl = 2.0;
    let mut platform = ScriptedPlatform::new(1000);
    let mut surface = CountingSurface::default();
    let mut game = GameLoop::new(cfg, &platform).expect("setup");

    platform.keys = KeySnapshot::new().with(KeyCode::Space);
    platform.advance_secs(0.01);
    game.frame(&mut platform, &mut surface);
    assert_eq!(game.scene().bullets.live(), 1);

    // One huge stalled frame: wall-clock decay retires the bullet even
    // though the scheduler only fired a single catch-up tick
    platform.keys = KeySnapshot::new();
    platform.advance_secs(3.0);
    game.frame(&mut platform, &mut surface);
    assert_eq!(game.scene().bullets.live(), 0);
}

#[test]
fn quit_event_stops_the_loop() {
    let mut platform = ScriptedPlatform::new(1000);
    let mut surface = CountingSurface::default();
    let mut game = GameLoop::new(test_config(), &platform).expect("setup");

    platform.events.push_back(PlatformEvent::Quit);
    game.frame(&mut platform, &mut surface);
    assert_eq!(game.state(), RunState::Stopped);
    assert!(!game.is_running());
}

#[test]
fn escape_key_stops_the_loop() {
    let mut platform = ScriptedPlatform::new(1000);
    let mut surface = CountingSurface::default();
    let mut game = GameLoop::new(test_config(), &platform).expect("setup");

    platform.keys = KeySnapshot::new().with(KeyCode::Escape);
    game.frame(&mut platform, &mut surface);
    assert_eq!(game.state(), RunState::Stopped);
}

#[test]
fn dynamic_blocks_fall_between_fixed_ticks() {
    let mut cfg = test_config();
    cfg.blocks.columns = 1;
    cfg.blocks.rows = 1;
    cfg.blocks.body_kind = BodyKind::Dynamic;
    cfg.blocks.origin = (100, 100);

    let mut platform = ScriptedPlatform::new(1000);
    let mut surface = CountingSurface::default();
    let mut game = GameLoop::new(cfg, &platform).expect("setup");
    assert_eq!(game.physics().body_count(), 1);

    let y0 = game.scene().blocks[0].y;
    for _ in 0..120 {
        platform.advance_secs(1.0 / 60.0);
        game.frame(&mut platform, &mut surface);
    }
    assert!(game.scene().blocks[0].y > y0 + 100);
}

#[test]
fn decorative_blocks_get_no_bodies() {
    let mut cfg = test_config();
    cfg.blocks.physics_bodies = false;
    let platform = ScriptedPlatform::new(1000);
    let game = GameLoop::new(cfg, &platform).expect("setup");

    assert_eq!(game.physics().body_count(), 0);
    assert!(game.scene().blocks.iter().all(|b| b.body.is_none()));
}

#[test]
fn render_draws_only_enabled_entities() {
    let mut cfg = test_config();
    cfg.blocks.columns = 2;
    cfg.blocks.rows = 1;
    let mut platform = ScriptedPlatform::new(1000);
    let mut surface = CountingSurface::default();
    let mut game = GameLoop::new(cfg, &platform).expect("setup");

    game.frame(&mut platform, &mut surface);
    // 2 blocks + player; the bullet pool is idle
    assert_eq!(surface.textured, 3);
    assert_eq!(surface.clears, 1);
    assert_eq!(surface.presents, 1);
}

#[test]
fn debug_overlay_outlines_block_bodies() {
    let mut cfg = test_config();
    cfg.blocks.columns = 2;
    cfg.blocks.rows = 1;
    cfg.debug.physics_overlay = true;
    let mut platform = ScriptedPlatform::new(1000);
    let mut surface = CountingSurface::default();
    let mut game = GameLoop::new(cfg, &platform).expect("setup");

    game.frame(&mut platform, &mut surface);
    // 4 outline segments per block body
    assert_eq!(surface.lines, 8);
}
