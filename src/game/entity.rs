//! Entities with Generational Handles
//!
//! Every game object is an `EntityData` record living in one of the world's
//! preallocated slots. Code outside the world refers to it through an
//! `Entity` handle:
//! - The index says which slot
//! - The generation says which lifetime of that slot
//! - Despawning bumps the slot's generation, so old handles stop resolving
//!
//! Without the generation a handle to a dead worm would silently start
//! pointing at whatever reused its slot.

use macroquad::prelude::Vec2;
use serde::{Serialize, Deserialize};
use super::collision::Aabb;

/// A reference to a game entity.
///
/// Two handles with the same index but different generations refer to
/// different entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    /// Slot index in the world
    index: u32,
    /// Slot generation at the time the handle was issued
    generation: u32,
}

impl Entity {
    /// Should only be called by the World.
    pub(crate) fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// A handle that never resolves.
    pub const NULL: Entity = Entity { index: u32::MAX, generation: 0 };

    pub fn is_null(&self) -> bool {
        self.index == u32::MAX
    }
}

impl Default for Entity {
    fn default() -> Self {
        Entity::NULL
    }
}

/// What an entity is. Add variants as the game grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EntityKind {
    #[default]
    None,
    Player,
    Worm,
    Rock,
}

impl EntityKind {
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::None => "none",
            EntityKind::Player => "player",
            EntityKind::Worm => "worm",
            EntityKind::Rock => "rock",
        }
    }
}

/// Index into the asset library's sprite list.
///
/// Image data is owned by the asset loader, never by the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpriteId(pub u32);

/// Per-entity state stored in a world slot.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityData {
    /// Top-left corner of the bounding box
    pub position: Vec2,
    /// Position before the last collision-free check; rollback target on hit
    pub last_position: Vec2,
    pub width: f32,
    pub height: f32,
    /// Movement units per second
    pub speed: f32,
    /// Zero or below means dead
    pub health: i32,
    pub kind: EntityKind,
    pub sprite: Option<SpriteId>,
}

impl EntityData {
    /// A fully initialised record at `position` with zero speed and 1 health.
    pub fn new(kind: EntityKind, position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            last_position: position,
            width: size.x,
            height: size.y,
            speed: 0.0,
            health: 1,
            kind,
            sprite: None,
        }
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_health(mut self, health: i32) -> Self {
        self.health = health;
        self
    }

    pub fn with_sprite(mut self, sprite: SpriteId) -> Self {
        self.sprite = Some(sprite);
        self
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_position_size(self.position, self.size())
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }
}

impl Default for EntityData {
    fn default() -> Self {
        Self::new(EntityKind::None, Vec2::ZERO, Vec2::ZERO)
    }
}
