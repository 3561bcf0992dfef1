//! Collision domain: proximity queries for walls and floors.

use bevy::prelude::*;

use super::aabb::Aabb;
use super::solid::{Solid, SolidKind};

/// Which sides of the actor currently touch a wall solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WallSensor {
    pub left: bool,
    pub right: bool,
}

impl WallSensor {
    /// True when `dx` pushes into a touched wall.
    pub fn blocks(&self, dx: f32) -> bool {
        (dx < 0.0 && self.left) || (dx > 0.0 && self.right)
    }
}

/// Check for `Wall` solids within `distance` of either side of `actor`.
///
/// Each side is tested with a thin strip hugging that edge, so a wall the
/// actor was snapped flush against still registers.
pub fn sense_walls(actor: &Aabb, solids: &[Solid], distance: f32) -> WallSensor {
    let half_strip = Vec2::new(distance * 0.5, actor.half.y);
    let left_strip = Aabb::new(
        Vec2::new(actor.left() - distance * 0.5, actor.center.y),
        half_strip,
    );
    let right_strip = Aabb::new(
        Vec2::new(actor.right() + distance * 0.5, actor.center.y),
        half_strip,
    );

    let mut walls = WallSensor::default();
    for solid in solids
        .iter()
        .filter(|s| s.active && s.kind == SolidKind::Wall)
    {
        let wall = solid.aabb();
        // A wall must lie on the sensed side, not merely overlap the strip.
        if wall.center.x <= actor.center.x && left_strip.overlaps(&wall) {
            walls.left = true;
        }
        if wall.center.x >= actor.center.x && right_strip.overlaps(&wall) {
            walls.right = true;
        }
    }
    walls
}

/// Nearest landing surface under `actor` within `max_distance`.
///
/// Returns the solid and the gap between the actor's bottom edge and the
/// surface top.
pub fn floor_beneath<'a>(
    actor: &Aabb,
    solids: &'a [Solid],
    max_distance: f32,
) -> Option<(&'a Solid, f32)> {
    solids
        .iter()
        .filter(|s| s.active && s.kind.is_landing_surface())
        .filter_map(|solid| {
            let surface = solid.aabb();
            if !actor.overlaps_x(&surface) {
                return None;
            }
            let gap = actor.bottom() - surface.top();
            (gap >= 0.0 && gap <= max_distance).then_some((solid, gap))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
}
