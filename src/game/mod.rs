//! Game Core
//!
//! A fixed entity pool and the per-frame rules that run on it.
//!
//! Key concepts:
//! - Entity: Generational handle into the world's slot pool
//! - World: Fixed-capacity container that owns every entity record
//! - Collision: Strict AABB overlap between two entities
//! - Step: The player/worm frame update (collide, damage, despawn, move)
//! - Renderer: Turns the world into draw commands

// The binary drives only part of the pool API; the rest is exercised by tests
#![allow(dead_code)]

pub mod entity;
pub mod world;
pub mod collision;
pub mod step;
pub mod renderer;

// Re-export main types
pub use entity::{Entity, EntityData, EntityKind, SpriteId};
pub use world::{World, MAX_ENTITY_COUNT};
pub use collision::{Aabb, collide};
pub use step::{ActorSprite, DamageRule, GameState, StepReport, DEFAULT_MAX_FRAME_TIME};
pub use renderer::{DrawCommand, HudLayout, build_draw_list, submit};
