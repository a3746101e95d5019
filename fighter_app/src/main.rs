//! Squarefighter prototype driver
//!
//! Wires the scripted headless platform into the engine's game loop. Pass a
//! TOML or RON config path as the first argument; otherwise
//! `squarefighter.toml` is used when present, falling back to the built-in
//! prototype defaults.

mod headless;

use std::path::Path;

use square_engine::prelude::*;

use crate::headless::{NullSurface, ScriptedPlatform};

/// Frames the scripted demo runs before quitting (10 s at 60 fps)
const DEMO_FRAMES: u64 = 600;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    log::info!("Squarefighter starting");

    let mut config = load_config()?;
    config.window.title = window_title();
    resolve_asset_paths(&mut config);
    log::info!(
        "Config: {}x{} playfield, {} Hz physics, pool of {}",
        config.window.width,
        config.window.height,
        config.simulation.tick_rate,
        config.bullets.capacity
    );

    let mut platform = ScriptedPlatform::new(DEMO_FRAMES);
    let mut surface = NullSurface::default();
    let mut game = GameLoop::new(config, &platform)?;
    game.run(&mut platform, &mut surface);

    log::info!(
        "Demo finished: {} frames, {} sprites drawn, {} bullets still live",
        platform.frames(),
        surface.sprites,
        game.scene().bullets.live()
    );
    Ok(())
}

/// First CLI argument as config path, else `squarefighter.toml` if present,
/// else defaults
fn load_config() -> Result<GameConfig, ConfigError> {
    if let Some(path) = std::env::args().nth(1) {
        log::info!("Loading config from {path}");
        return GameConfig::load(path);
    }
    let default_path = Path::new("squarefighter.toml");
    if default_path.exists() {
        log::info!("Loading config from {}", default_path.display());
        return GameConfig::load(default_path);
    }
    log::info!("No config file, using built-in defaults");
    Ok(GameConfig::default())
}

/// Window title from the executable name, capitalized
fn window_title() -> String {
    let title = std::env::args()
        .next()
        .as_deref()
        .map(Path::new)
        .and_then(|p| p.file_stem())
        .and_then(|n| n.to_str())
        .map_or_else(|| "squarefighter".to_string(), str::to_string);
    let mut chars = title.chars();
    chars.next().map_or(title.clone(), |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}

/// Texture paths in the config are relative to the working directory; when
/// running via cargo from the workspace root, retry relative to this crate
fn resolve_asset_paths(config: &mut GameConfig) {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    for texture in [
        &mut config.player.texture,
        &mut config.bullets.texture,
        &mut config.blocks.texture,
    ] {
        if !Path::new(texture.as_str()).exists() {
            let candidate = manifest_dir.join(texture.as_str());
            if candidate.exists() {
                *texture = candidate.display().to_string();
            }
        }
    }
}
