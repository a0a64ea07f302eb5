//! Scene Renderer
//!
//! Drawing is split in two: `build_draw_list` walks the world and produces
//! plain `DrawCommand`s, `submit` replays them through macroquad. Only
//! `submit` needs a window.
//!
//! Screen space: origin at the top-left, Y grows downward.

use macroquad::prelude::*;
use crate::asset::AssetLibrary;
use super::entity::SpriteId;
use super::step::GameState;

/// Where and how large the health readout is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudLayout {
    pub position: Vec2,
    pub font_size: u16,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Sprite { sprite: SpriteId, position: Vec2, size: Vec2 },
    Text { text: String, position: Vec2, font_size: u16 },
}

/// Collect this frame's draw commands: every active entity that has a
/// sprite, in slot order, then the health readout.
pub fn build_draw_list(state: &GameState, hud: HudLayout) -> Vec<DrawCommand> {
    let mut commands: Vec<DrawCommand> = state
        .world
        .iter_active()
        .filter_map(|(_, data)| {
            data.sprite.map(|sprite| DrawCommand::Sprite {
                sprite,
                position: data.position,
                size: data.size(),
            })
        })
        .collect();

    commands.push(DrawCommand::Text {
        text: format!("Health: {}", state.player_health()),
        position: hud.position,
        font_size: hud.font_size,
    });
    commands
}

/// Draw a command list with macroquad.
pub fn submit(commands: &[DrawCommand], assets: &AssetLibrary) {
    for command in commands {
        match command {
            DrawCommand::Sprite { sprite, position, size } => {
                let Some(texture) = assets.sprite(*sprite) else {
                    log::warn!("No texture for {:?}", sprite);
                    continue;
                };
                draw_texture_ex(
                    texture,
                    position.x,
                    position.y,
                    WHITE,
                    DrawTextureParams {
                        dest_size: Some(*size),
                        ..Default::default()
                    },
                );
            }
            DrawCommand::Text { text, position, font_size } => {
                draw_text_ex(
                    text,
                    position.x.round(),
                    position.y.round(),
                    TextParams {
                        font: Some(&assets.font),
                        font_size: *font_size,
                        color: WHITE,
                        ..Default::default()
                    },
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{DamageRule, EntityData, EntityKind, World};

    const HUD: HudLayout = HudLayout { position: Vec2::new(16.0, 40.0), font_size: 28 };

    fn sprites_in(commands: &[DrawCommand]) -> Vec<SpriteId> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Sprite { sprite, .. } => Some(*sprite),
                _ => None,
            })
            .collect()
    }

    fn state(player_health: i32, worm_health: i32) -> GameState {
        let mut world = World::with_capacity(4);
        let player = world
            .create(
                EntityData::new(EntityKind::Player, Vec2::ZERO, Vec2::splat(60.0))
                    .with_health(player_health)
                    .with_sprite(SpriteId(0)),
            )
            .unwrap();
        let worm = world
            .create(
                EntityData::new(EntityKind::Worm, Vec2::new(50.0, 50.0), Vec2::splat(60.0))
                    .with_health(worm_health)
                    .with_sprite(SpriteId(1)),
            )
            .unwrap();
        GameState::from_world(world, player, worm, DamageRule::Sequential, 0.25)
    }

    #[test]
    fn test_draws_active_entities_then_hud() {
        let state = state(100, 200);
        let commands = build_draw_list(&state, HUD);

        assert_eq!(commands.len(), 3);
        assert_eq!(
            commands[0],
            DrawCommand::Sprite {
                sprite: SpriteId(0),
                position: Vec2::ZERO,
                size: Vec2::splat(60.0),
            }
        );
        assert_eq!(
            commands[2],
            DrawCommand::Text {
                text: "Health: 100".to_string(),
                position: HUD.position,
                font_size: 28,
            }
        );
    }

    #[test]
    fn test_dead_player_not_drawn_but_health_shown() {
        let mut state = state(3, 200);
        let report = state.step(1.0 / 60.0, Vec2::ZERO);
        assert!(report.player_died);

        let commands = build_draw_list(&state, HUD);
        assert_eq!(sprites_in(&commands), vec![SpriteId(1)]);
        assert!(commands.contains(&DrawCommand::Text {
            text: "Health: -197".to_string(),
            position: HUD.position,
            font_size: 28,
        }));
    }

    #[test]
    fn test_entities_without_sprite_are_skipped() {
        let mut world = World::with_capacity(4);
        let player = world
            .create(EntityData::new(EntityKind::Player, Vec2::ZERO, Vec2::ONE))
            .unwrap();
        let worm = world
            .create(EntityData::new(EntityKind::Worm, Vec2::ZERO, Vec2::ONE).with_sprite(SpriteId(1)))
            .unwrap();
        let state = GameState::from_world(world, player, worm, DamageRule::Sequential, 0.25);

        assert_eq!(sprites_in(&build_draw_list(&state, HUD)), vec![SpriteId(1)]);
    }
}
