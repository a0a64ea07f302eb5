//! Asset Loading
//!
//! Fonts and sprite textures are owned here and handed to the game by
//! `SpriteId`. Every asset is required: a missing file stops startup.

mod library;

pub use library::{AssetLibrary, PLAYER_SPRITE, WORM_SPRITE};
