//! Game World
//!
//! The World owns a fixed pool of entity slots, allocated once up front:
//! - `create` claims the first inactive slot in index order
//! - `despawn` clears the active flag and bumps the slot generation
//! - A full pool is an error, never a reallocation
//!
//! Records are values in the pool; nothing is heap-allocated per entity.

use super::collision;
use super::entity::{Entity, EntityData};
use crate::error::{GameError, Result};

/// Number of slots in a default world.
pub const MAX_ENTITY_COUNT: usize = 1024;

/// One pool slot. `data` is don't-care while `active` is false.
struct Slot {
    generation: u32,
    active: bool,
    data: EntityData,
}

/// Fixed-capacity container for every entity in the game.
pub struct World {
    slots: Box<[Slot]>,
    active_count: usize,
}

impl World {
    /// Create a world with `MAX_ENTITY_COUNT` inactive slots.
    pub fn new() -> Self {
        Self::with_capacity(MAX_ENTITY_COUNT)
    }

    /// Create a world with `capacity` inactive slots. The capacity never changes.
    pub fn with_capacity(capacity: usize) -> Self {
        let slots = (0..capacity)
            .map(|_| Slot { generation: 0, active: false, data: EntityData::default() })
            .collect();
        Self { slots, active_count: 0 }
    }

    // =========================================================================
    // Entity Management
    // =========================================================================

    /// Claim the first free slot and store `data` in it.
    pub fn create(&mut self, data: EntityData) -> Result<Entity> {
        let Some(index) = self.slots.iter().position(|slot| !slot.active) else {
            return Err(GameError::PoolExhausted { capacity: self.slots.len() });
        };

        let slot = &mut self.slots[index];
        slot.active = true;
        slot.data = data;
        let generation = slot.generation;
        self.active_count += 1;
        Ok(Entity::new(index as u32, generation))
    }

    /// Deactivate an entity, leaving its slot free for reuse.
    /// Returns false if the handle was already stale.
    pub fn despawn(&mut self, entity: Entity) -> bool {
        let Some(slot) = self.slot_mut(entity) else {
            return false;
        };
        slot.active = false;
        slot.generation = slot.generation.wrapping_add(1);
        self.active_count -= 1;
        true
    }

    /// Despawn everything. All outstanding handles become stale.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            if slot.active {
                slot.active = false;
                slot.generation = slot.generation.wrapping_add(1);
            }
        }
        self.active_count = 0;
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        self.slot(entity).is_some()
    }

    pub fn get(&self, entity: Entity) -> Option<&EntityData> {
        self.slot(entity).map(|slot| &slot.data)
    }

    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut EntityData> {
        self.slot_mut(entity).map(|slot| &mut slot.data)
    }

    /// Collision check by handle. Dead or stale handles never collide.
    pub fn collide(&self, a: Entity, b: Entity) -> bool {
        collision::collide(self.get(a), self.get(b))
    }

    /// Active entities in slot order.
    pub fn iter_active(&self) -> impl Iterator<Item = (Entity, &EntityData)> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.active)
            .map(|(idx, slot)| (Entity::new(idx as u32, slot.generation), &slot.data))
    }

    pub fn active_count(&self) -> usize {
        self.active_count
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn slot(&self, entity: Entity) -> Option<&Slot> {
        if entity.is_null() {
            return None;
        }
        self.slots
            .get(entity.index() as usize)
            .filter(|slot| slot.active && slot.generation == entity.generation())
    }

    fn slot_mut(&mut self, entity: Entity) -> Option<&mut Slot> {
        if entity.is_null() {
            return None;
        }
        self.slots
            .get_mut(entity.index() as usize)
            .filter(|slot| slot.active && slot.generation == entity.generation())
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entity::EntityKind;
    use macroquad::prelude::Vec2;
    use std::collections::HashSet;

    fn rock() -> EntityData {
        EntityData::new(EntityKind::Rock, Vec2::ZERO, Vec2::new(10.0, 10.0))
    }

    #[test]
    fn test_new_world_is_empty() {
        let world = World::new();
        assert_eq!(world.capacity(), MAX_ENTITY_COUNT);
        assert_eq!(world.active_count(), 0);
        assert_eq!(world.iter_active().count(), 0);
    }

    #[test]
    fn test_fill_to_capacity_then_fail() {
        let mut world = World::new();
        let mut indices = HashSet::new();
        for _ in 0..MAX_ENTITY_COUNT {
            let e = world.create(rock()).expect("slot available");
            assert!(indices.insert(e.index()));
        }
        assert_eq!(world.active_count(), MAX_ENTITY_COUNT);

        let overflow = world.create(rock());
        assert!(matches!(
            overflow,
            Err(GameError::PoolExhausted { capacity: MAX_ENTITY_COUNT })
        ));
    }

    #[test]
    fn test_first_fit_reuses_freed_slot() {
        let mut world = World::with_capacity(8);
        let e0 = world.create(rock()).unwrap();
        let e1 = world.create(rock()).unwrap();
        let e2 = world.create(rock()).unwrap();
        assert_eq!((e0.index(), e1.index(), e2.index()), (0, 1, 2));

        world.despawn(e1);
        let reused = world.create(rock()).unwrap();
        assert_eq!(reused.index(), 1);

        let next = world.create(rock()).unwrap();
        assert_eq!(next.index(), 3);
    }

    #[test]
    fn test_first_fit_prefers_lowest_index() {
        let mut world = World::with_capacity(4);
        let handles: Vec<_> = (0..4).map(|_| world.create(rock()).unwrap()).collect();
        world.despawn(handles[3]);
        world.despawn(handles[0]);
        assert_eq!(world.create(rock()).unwrap().index(), 0);
        assert_eq!(world.create(rock()).unwrap().index(), 3);
    }

    #[test]
    fn test_stale_handle_rejected_after_reuse() {
        let mut world = World::with_capacity(2);
        let old = world.create(rock().with_health(7)).unwrap();
        assert!(world.despawn(old));

        let new = world.create(rock().with_health(9)).unwrap();
        assert_eq!(new.index(), old.index());
        assert_ne!(new.generation(), old.generation());

        assert!(!world.is_alive(old));
        assert!(world.get(old).is_none());
        assert!(world.get_mut(old).is_none());
        assert!(!world.despawn(old));
        assert_eq!(world.get(new).map(|d| d.health), Some(9));
    }

    #[test]
    fn test_despawn_twice_is_noop() {
        let mut world = World::with_capacity(2);
        let e = world.create(rock()).unwrap();
        assert!(world.despawn(e));
        assert!(!world.despawn(e));
        assert_eq!(world.active_count(), 0);
    }

    #[test]
    fn test_null_and_out_of_range_handles() {
        let mut world = World::with_capacity(2);
        assert!(!world.is_alive(Entity::NULL));
        assert!(world.get(Entity::new(40, 0)).is_none());
        assert!(!world.despawn(Entity::new(40, 0)));
    }

    #[test]
    fn test_iter_active_skips_despawned() {
        let mut world = World::with_capacity(4);
        let a = world.create(rock()).unwrap();
        let b = world.create(rock()).unwrap();
        let c = world.create(rock()).unwrap();
        world.despawn(b);

        let alive: Vec<_> = world.iter_active().map(|(e, _)| e).collect();
        assert_eq!(alive, vec![a, c]);
    }

    #[test]
    fn test_clear_invalidates_everything() {
        let mut world = World::with_capacity(4);
        let a = world.create(rock()).unwrap();
        let b = world.create(rock()).unwrap();
        world.clear();

        assert_eq!(world.active_count(), 0);
        assert!(!world.is_alive(a));
        assert!(!world.is_alive(b));
        assert_eq!(world.create(rock()).unwrap().index(), 0);
    }

    #[test]
    fn test_collide_by_handle_ignores_despawned() {
        let mut world = World::with_capacity(4);
        let a = world.create(rock()).unwrap();
        let b = world.create(rock()).unwrap();
        assert!(world.collide(a, b));

        world.despawn(b);
        assert!(!world.collide(a, b));
    }
}
