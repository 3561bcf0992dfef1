//! Collision domain: static level geometry.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;

/// How a solid blocks the actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum SolidKind {
    /// Landing surface from above.
    Floor,
    /// Blocks upward motion from below.
    Ceiling,
    /// Blocks horizontal motion.
    Wall,
    /// One-way landing surface, passable from below.
    Platform,
    /// Impassable from every direction.
    Block,
}

impl SolidKind {
    pub fn is_landing_surface(self) -> bool {
        matches!(self, SolidKind::Floor | SolidKind::Platform | SolidKind::Block)
    }
}

/// A static, axis-aligned solid. Never moves during a tick; only its
/// `active` flag may be toggled between ticks.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Solid {
    pub center: Vec2,
    pub half_extents: Vec2,
    pub kind: SolidKind,
    pub active: bool,
}

/// Index of a solid in its level's list. Snapshots are sorted by it, so
/// insertion-order resolution follows the level data rather than ECS storage
/// order. Solids without one go last.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SolidOrder(pub u32);

/// Rejected solid geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidSolid {
    pub center: Vec2,
    pub half_extents: Vec2,
    pub reason: &'static str,
}

impl std::fmt::Display for InvalidSolid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid solid at ({}, {}) with half extents ({}, {}): {}",
            self.center.x, self.center.y, self.half_extents.x, self.half_extents.y, self.reason
        )
    }
}

impl std::error::Error for InvalidSolid {}

impl Solid {
    /// Build an active solid, rejecting degenerate geometry.
    pub fn new(center: Vec2, half_extents: Vec2, kind: SolidKind) -> Result<Self, InvalidSolid> {
        let reject = |reason| InvalidSolid {
            center,
            half_extents,
            reason,
        };

        if !center.is_finite() {
            return Err(reject("center is not finite"));
        }
        if !half_extents.is_finite() {
            return Err(reject("half extents are not finite"));
        }
        if half_extents.x <= 0.0 || half_extents.y <= 0.0 {
            return Err(reject("half extents must be positive"));
        }

        Ok(Self {
            center,
            half_extents,
            kind,
            active: true,
        })
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.center, self.half_extents)
    }
}
