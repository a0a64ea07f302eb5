//! Asset Library - font and sprites for the arena scene

use macroquad::prelude::*;
use crate::config::AssetPaths;
use crate::error::{GameError, Result};
use crate::game::{ActorSprite, SpriteId};

/// Slot of the player texture in `AssetLibrary::sprites`
pub const PLAYER_SPRITE: SpriteId = SpriteId(0);
/// Slot of the worm texture in `AssetLibrary::sprites`
pub const WORM_SPRITE: SpriteId = SpriteId(1);

/// Loaded font and sprite textures
pub struct AssetLibrary {
    pub font: Font,
    sprites: Vec<Texture2D>,
}

impl AssetLibrary {
    /// Load the font and both actor sprites.
    pub async fn load(paths: &AssetPaths) -> Result<Self> {
        let font = load_ttf_font(&paths.font)
            .await
            .map_err(|e| load_error(&paths.font, e))?;
        log::info!("Loaded font {}", paths.font);

        let mut sprites = Vec::with_capacity(2);
        for path in [&paths.player_sprite, &paths.worm_sprite] {
            let texture = load_texture(path).await.map_err(|e| load_error(path, e))?;
            // Pixel art is upscaled, keep it crisp
            texture.set_filter(FilterMode::Nearest);
            log::info!("Loaded sprite {} ({}x{})", path, texture.width(), texture.height());
            sprites.push(texture);
        }

        Ok(Self { font, sprites })
    }

    pub fn sprite(&self, id: SpriteId) -> Option<&Texture2D> {
        self.sprites.get(id.0 as usize)
    }

    /// Texture size in pixels, used to size the entity's bounding box.
    pub fn actor_sprite(&self, id: SpriteId) -> Option<ActorSprite> {
        self.sprite(id).map(|texture| ActorSprite {
            id,
            size: Vec2::new(texture.width(), texture.height()),
        })
    }
}

fn load_error(path: &str, err: impl std::fmt::Display) -> GameError {
    GameError::AssetLoad {
        path: path.to_string(),
        reason: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_keeps_path_and_reason() {
        let err = load_error("assets/sprites/worm.png", "file not found");
        match err {
            GameError::AssetLoad { path, reason } => {
                assert_eq!(path, "assets/sprites/worm.png");
                assert_eq!(reason, "file not found");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_sprite_slots_are_distinct() {
        assert_ne!(PLAYER_SPRITE, WORM_SPRITE);
    }
}
