//! Collision System
//!
//! Axis-aligned bounding boxes, top-left anchored. Overlap is strict on
//! both axes: boxes that only share an edge do not collide.

use macroquad::prelude::Vec2;
use super::entity::EntityData;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box spanning `position` to `position + size`.
    pub fn from_position_size(position: Vec2, size: Vec2) -> Self {
        Self { min: position, max: position + size }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Strict overlap test: a zero-area intersection is not an overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Check two entities for overlap.
///
/// `None` stands for an inactive entity (or a stale handle) and never
/// collides. Pure: no state is touched.
pub fn collide(a: Option<&EntityData>, b: Option<&EntityData>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.bounds().overlaps(&b.bounds()),
        _ => false,
    }
}
