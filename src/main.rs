//! SPRITE-REEL viewer
//!
//! Plays every animation of one character skin from a sprite folder.
//!
//! Usage: `sprite-reel [config.ron]`

use std::path::PathBuf;

use macroquad::prelude::*;
use sprite_reel::config::{ViewerConfig, DEFAULT_CONFIG_FILE};
use sprite_reel::input::poll_events;
use sprite_reel::resources::{ResourceManager, TextureLoader};
use sprite_reel::settings::{SettingsManager, SETTINGS_FILE};
use sprite_reel::viewer::Viewer;
use sprite_reel::{AnimationController, SceneManager, VERSION};

/// Frame size assumed when the skin has nothing to show
const FALLBACK_SPRITE_SIZE: (f32, f32) = (64.0, 64.0);

fn window_conf() -> Conf {
    // Read only; `main` does the load that creates or repairs the file
    let settings = SettingsManager::peek(SETTINGS_FILE);
    Conf {
        window_title: format!("SPRITE-REEL v{}", VERSION),
        window_width: settings.resolution[0] as i32,
        window_height: settings.resolution[1] as i32,
        window_resizable: true,
        high_dpi: true,
        fullscreen: settings.fullscreen,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = SettingsManager::load(SETTINGS_FILE);

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let config = match ViewerConfig::load_or_default(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load {}: {}, using defaults", config_path.display(), e);
            ViewerConfig::default()
        }
    };

    let mut resources = ResourceManager::new(&config.sprite_root, TextureLoader::new());
    let controller = match resources.build_controller(
        &config.character,
        &config.skin,
        config.frame_rate,
        config.looping,
    ) {
        Ok(controller) => controller,
        Err(e) => {
            eprintln!("Failed to load {}/{}: {}", config.character, config.skin, e);
            AnimationController::new()
        }
    };
    println!(
        "Loaded {} animations ({} images) for {}/{}",
        controller.len(),
        resources.image_count(),
        config.character,
        config.skin
    );

    let sprite_size = controller
        .current_frame()
        .map(|texture| (texture.width(), texture.height()))
        .unwrap_or(FALLBACK_SPRITE_SIZE);

    let mut viewer = Viewer::new(controller, &config, sprite_size);
    viewer
        .controller
        .set_speed(config.speed * settings.settings.animation_speed);
    viewer.set_x((screen_width() - sprite_size.0 * config.scale) * 0.5);

    let mut scenes = SceneManager::new();
    scenes.set(Box::new(viewer));

    println!("=== SPRITE-REEL ===");

    loop {
        for event in poll_events() {
            scenes.handle_event(&event);
        }
        if scenes.wants_quit() {
            break;
        }

        scenes.update(get_frame_time());
        scenes.draw();

        next_frame().await;
    }
}
