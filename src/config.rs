//! Game configuration
//!
//! Uses RON (Rusty Object Notation) for a human-editable settings file.
//! Every field has a default that reproduces the stock scene, so a missing
//! file is fine and a partial file only overrides what it names.

use std::fs;
use std::path::Path;
use macroquad::prelude::{Color, Vec2};
use serde::{Deserialize, Deserializer, Serialize};
use crate::error::{GameError, Result};
use crate::game::{DamageRule, DEFAULT_MAX_FRAME_TIME};

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "worm-arena.ron";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: i32,
    pub height: i32,
    /// Background color as 0xRRGGBBAA
    pub clear_color: u32,
}

impl WindowSettings {
    pub fn clear_color(&self) -> Color {
        rgba_from_hex(self.clear_color)
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Game Example".to_string(),
            width: 1280,
            height: 720,
            clear_color: 0x2a2a3aff,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub font: String,
    pub player_sprite: String,
    pub worm_sprite: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            font: "assets/fonts/arial.ttf".to_string(),
            player_sprite: "assets/sprites/man.png".to_string(),
            worm_sprite: "assets/sprites/worm.png".to_string(),
        }
    }
}

/// Spawn settings for one of the two scene actors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnSettings {
    pub position: (f32, f32),
    pub speed: f32,
    pub health: i32,
    /// Box size used when no sprite dimensions are known
    pub fallback_size: (f32, f32),
}

impl SpawnSettings {
    pub fn player() -> Self {
        Self {
            position: (0.0, 0.0),
            speed: 300.0,
            health: 100,
            fallback_size: (40.0, 40.0),
        }
    }

    pub fn worm() -> Self {
        Self {
            position: (50.0, 50.0),
            speed: 250.0,
            health: 2,
            fallback_size: (40.0, 40.0),
        }
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.position.0, self.position.1)
    }

    pub fn fallback_size(&self) -> Vec2 {
        Vec2::new(self.fallback_size.0, self.fallback_size.1)
    }

    fn validate(&self, name: &str) -> Result<()> {
        let (x, y) = self.position;
        if !x.is_finite() || !y.is_finite() {
            return Err(GameError::Config(format!("{}.position must be finite", name)));
        }
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(GameError::Config(format!(
                "{}.speed must be a non-negative number (got {})", name, self.speed
            )));
        }
        let (w, h) = self.fallback_size;
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return Err(GameError::Config(format!(
                "{}.fallback_size must be positive (got {}x{})", name, w, h
            )));
        }
        Ok(())
    }
}

/// Spawn fields as written in the file; anything left out keeps the actor default.
#[derive(Debug, Deserialize)]
struct SpawnOverrides {
    #[serde(default, deserialize_with = "present")]
    position: Option<(f32, f32)>,
    #[serde(default, deserialize_with = "present")]
    speed: Option<f32>,
    #[serde(default, deserialize_with = "present")]
    health: Option<i32>,
    #[serde(default, deserialize_with = "present")]
    fallback_size: Option<(f32, f32)>,
}

impl SpawnOverrides {
    fn apply(self, base: SpawnSettings) -> SpawnSettings {
        SpawnSettings {
            position: self.position.unwrap_or(base.position),
            speed: self.speed.unwrap_or(base.speed),
            health: self.health.unwrap_or(base.health),
            fallback_size: self.fallback_size.unwrap_or(base.fallback_size),
        }
    }
}

/// Read a plain value into `Some`, so the file writes `health: 50`, not `Some(50)`.
fn present<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

fn partial_player<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<SpawnSettings, D::Error> {
    SpawnOverrides::deserialize(deserializer).map(|o| o.apply(SpawnSettings::player()))
}

fn partial_worm<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<SpawnSettings, D::Error> {
    SpawnOverrides::deserialize(deserializer).map(|o| o.apply(SpawnSettings::worm()))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowSettings,
    pub assets: AssetPaths,
    pub font_size: u16,
    /// Top-left of the health readout
    pub hud_position: (f32, f32),
    /// Sprites are drawn at texture size times this
    pub sprite_scale: f32,
    #[serde(deserialize_with = "partial_player")]
    pub player: SpawnSettings,
    #[serde(deserialize_with = "partial_worm")]
    pub worm: SpawnSettings,
    pub damage_rule: DamageRule,
    /// Frame delta is clamped to this many seconds
    pub max_frame_time: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            assets: AssetPaths::default(),
            font_size: 28,
            hud_position: (16.0, 40.0),
            sprite_scale: 4.0,
            player: SpawnSettings::player(),
            worm: SpawnSettings::worm(),
            damage_rule: DamageRule::default(),
            max_frame_time: DEFAULT_MAX_FRAME_TIME,
        }
    }
}

impl GameConfig {
    /// Load from `path`, falling back to defaults if the file does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        let config = Self::from_ron(&contents)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_ron(s: &str) -> Result<Self> {
        let config: GameConfig = ron::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_ron(&self) -> Result<String> {
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .indentor("  ".to_string());
        ron::ser::to_string_pretty(self, pretty)
            .map_err(|e| GameError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.window.width <= 0 || self.window.height <= 0 {
            return Err(GameError::Config(format!(
                "window size must be positive (got {}x{})", self.window.width, self.window.height
            )));
        }
        if !self.sprite_scale.is_finite() || self.sprite_scale <= 0.0 {
            return Err(GameError::Config(format!(
                "sprite_scale must be positive (got {})", self.sprite_scale
            )));
        }
        if !self.max_frame_time.is_finite() || self.max_frame_time <= 0.0 {
            return Err(GameError::Config(format!(
                "max_frame_time must be positive (got {})", self.max_frame_time
            )));
        }
        if self.font_size == 0 {
            return Err(GameError::Config("font_size must be non-zero".to_string()));
        }
        self.player.validate("player")?;
        self.worm.validate("worm")?;
        Ok(())
    }

    pub fn hud_position(&self) -> Vec2 {
        Vec2::new(self.hud_position.0, self.hud_position.1)
    }
}

/// Convert 0xRRGGBBAA into a color.
pub fn rgba_from_hex(hex: u32) -> Color {
    let [r, g, b, a] = hex.to_be_bytes();
    Color::from_rgba(r, g, b, a)
}
