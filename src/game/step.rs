//! Per-frame Game Step
//!
//! One player, one worm. Each frame:
//! 1. Test player against worm
//! 2. On hit: roll the player back and trade damage; otherwise remember
//!    the player's position as the rollback target
//! 3. Despawn whoever dropped to zero health
//! 4. Move the player along the input axis
//!
//! The collision test sees the position produced by the previous frame's
//! movement, so a hit is always resolved one frame after the overlapping move.

use macroquad::prelude::Vec2;
use serde::{Serialize, Deserialize};
use super::entity::{Entity, EntityData, EntityKind, SpriteId};
use super::world::World;
use crate::config::{GameConfig, SpawnSettings};
use crate::error::Result;

/// Frame delta cap used when none (or a nonsensical one) is given.
pub const DEFAULT_MAX_FRAME_TIME: f32 = 0.25;

/// How mutual damage is applied when player and worm overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DamageRule {
    /// Player loses the worm's health, then the worm loses the player's
    /// already-reduced health. Order dependent; matches the classic scene.
    #[default]
    Sequential,
    /// Both take damage equal to the other's health before the hit.
    Snapshot,
}

/// A loaded sprite and its texture size in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActorSprite {
    pub id: SpriteId,
    pub size: Vec2,
}

/// What happened during one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepReport {
    pub collided: bool,
    pub player_died: bool,
    pub worm_died: bool,
}

/// Owned game context: the world plus handles to the two scene actors.
pub struct GameState {
    pub world: World,
    pub player: Entity,
    pub worm: Entity,
    pub damage_rule: DamageRule,
    max_frame_time: f32,
    /// Last health seen for the player, kept after it despawns for the HUD
    player_health: i32,
    frame: u64,
}

impl GameState {
    /// Spawn the player and the worm into a fresh world.
    pub fn spawn(
        config: &GameConfig,
        player_sprite: Option<ActorSprite>,
        worm_sprite: Option<ActorSprite>,
    ) -> Result<Self> {
        let mut world = World::new();
        let player = world.create(actor(
            EntityKind::Player, &config.player, player_sprite, config.sprite_scale,
        ))?;
        let worm = world.create(actor(
            EntityKind::Worm, &config.worm, worm_sprite, config.sprite_scale,
        ))?;
        for (entity, data) in world.iter_active() {
            log::info!("Spawned {} {:?} at {}", data.kind.label(), entity, data.position);
        }

        Ok(Self::from_world(world, player, worm, config.damage_rule, config.max_frame_time))
    }

    /// Wrap an already populated world.
    pub fn from_world(
        world: World,
        player: Entity,
        worm: Entity,
        damage_rule: DamageRule,
        max_frame_time: f32,
    ) -> Self {
        let player_health = world.get(player).map(|p| p.health).unwrap_or(0);
        let max_frame_time = if max_frame_time.is_finite() && max_frame_time > 0.0 {
            max_frame_time
        } else {
            log::warn!("Ignoring max_frame_time {}, using {}", max_frame_time, DEFAULT_MAX_FRAME_TIME);
            DEFAULT_MAX_FRAME_TIME
        };
        Self {
            world,
            player,
            worm,
            damage_rule,
            max_frame_time,
            player_health,
            frame: 0,
        }
    }

    /// Value shown in the health readout.
    pub fn player_health(&self) -> i32 {
        self.player_health
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Advance the simulation by `dt` seconds with movement input `axis`.
    pub fn step(&mut self, dt: f32, axis: Vec2) -> StepReport {
        // max/min rather than clamp: a NaN dt becomes 0 instead of panicking
        let dt = dt.max(0.0).min(self.max_frame_time);
        self.frame += 1;

        let mut report = StepReport {
            collided: self.world.collide(self.player, self.worm),
            ..Default::default()
        };

        if report.collided {
            log::debug!("frame {}: collision detected", self.frame);
            self.resolve_hit();
        } else if let Some(player) = self.world.get_mut(self.player) {
            player.last_position = player.position;
        }

        if let Some(player) = self.world.get(self.player) {
            self.player_health = player.health;
        }

        report.player_died = self.despawn_if_dead(self.player);
        report.worm_died = self.despawn_if_dead(self.worm);
        if report.player_died {
            log::info!("Player died on frame {}", self.frame);
        }
        if report.worm_died {
            log::info!("Worm died on frame {}", self.frame);
        }

        let direction = axis.normalize_or_zero();
        if let Some(player) = self.world.get_mut(self.player) {
            player.position += direction * player.speed * dt;
        }

        report
    }

    /// Roll the player back and trade damage. Both entities are alive here.
    fn resolve_hit(&mut self) {
        let (Some(player_before), Some(worm_before)) = (
            self.world.get(self.player).map(|p| p.health),
            self.world.get(self.worm).map(|w| w.health),
        ) else {
            return;
        };

        let player_after = player_before.saturating_sub(worm_before);
        let worm_damage = match self.damage_rule {
            DamageRule::Sequential => player_after,
            DamageRule::Snapshot => player_before,
        };

        if let Some(player) = self.world.get_mut(self.player) {
            player.position = player.last_position;
            player.health = player_after;
        }
        if let Some(worm) = self.world.get_mut(self.worm) {
            worm.health = worm.health.saturating_sub(worm_damage);
        }
    }

    fn despawn_if_dead(&mut self, entity: Entity) -> bool {
        let dead = self.world.get(entity).is_some_and(EntityData::is_dead);
        dead && self.world.despawn(entity)
    }
}

/// Build a fully initialised actor record from spawn settings.
fn actor(
    kind: EntityKind,
    settings: &SpawnSettings,
    sprite: Option<ActorSprite>,
    scale: f32,
) -> EntityData {
    let size = sprite
        .map(|s| s.size * scale)
        .unwrap_or_else(|| settings.fallback_size());
    let data = EntityData::new(kind, settings.position(), size)
        .with_speed(settings.speed)
        .with_health(settings.health);
    match sprite {
        Some(s) => data.with_sprite(s.id),
        None => data,
    }
}
