//! WORM ARENA: one player, one worm, one fixed entity pool
//!
//! Walk the little man around with WASD, the arrow keys or a gamepad stick.
//! Touching the worm bounces you back and trades health. Escape quits.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod asset;
mod config;
mod error;
mod game;
mod input;

use macroquad::prelude::*;
use asset::{AssetLibrary, PLAYER_SPRITE, WORM_SPRITE};
use config::{GameConfig, WindowSettings, DEFAULT_CONFIG_FILE};
use error::fatal;
use game::{GameState, HudLayout, build_draw_list, submit};
use input::InputState;

fn window_conf(window: &WindowSettings) -> Conf {
    Conf {
        window_title: window.title.clone(),
        window_width: window.width,
        window_height: window.height,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("=== WORM ARENA v{} ===", VERSION);

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());
    let config = GameConfig::load(&config_path).unwrap_or_else(|e| fatal(e));

    macroquad::Window::from_config(window_conf(&config.window), run(config));
}

async fn run(config: GameConfig) {
    let assets = AssetLibrary::load(&config.assets)
        .await
        .unwrap_or_else(|e| fatal(e));

    let mut state = GameState::spawn(
        &config,
        assets.actor_sprite(PLAYER_SPRITE),
        assets.actor_sprite(WORM_SPRITE),
    )
    .unwrap_or_else(|e| fatal(e));

    let mut input = InputState::new();
    if input.has_gamepad() {
        log::info!("Gamepad connected");
    }

    let hud = HudLayout {
        position: config.hud_position(),
        font_size: config.font_size,
    };
    let clear_color = config.window.clear_color();

    loop {
        input.poll();
        if input.quit_requested() {
            break;
        }

        let dt = get_frame_time();
        state.step(dt, input.movement());

        clear_background(clear_color);
        let commands = build_draw_list(&state, hud);
        submit(&commands, &assets);

        next_frame().await;
    }

    log::info!("Quit after {} frames", state.frame());
}
