//! Content domain: serialized level definitions.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::collision::{InvalidSolid, Solid, SolidKind};

// ============================================================================
// File wrapper
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Levels (levels.ron / levels.json)
// ============================================================================

/// A room's static geometry and actor spawn point.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LevelDef {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub spawn: (f32, f32),
    pub solids: Vec<SolidDef>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct SolidDef {
    pub center: (f32, f32),
    pub half_extents: (f32, f32),
    pub kind: SolidKind,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl SolidDef {
    pub fn to_solid(&self) -> Result<Solid, InvalidSolid> {
        Solid::new(
            Vec2::new(self.center.0, self.center.1),
            Vec2::new(self.half_extents.0, self.half_extents.1),
            self.kind,
        )
        .map(|solid| solid.with_active(self.active))
    }
}

impl LevelDef {
    pub fn spawn_point(&self) -> Vec2 {
        Vec2::new(self.spawn.0, self.spawn.1)
    }

    /// Convert every solid definition, stopping at the first invalid one.
    pub fn build_solids(&self) -> Result<Vec<Solid>, InvalidSolid> {
        self.solids.iter().map(SolidDef::to_solid).collect()
    }
}
