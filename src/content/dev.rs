//! Content domain: built-in test room for development.

use super::data::{LevelDef, SolidDef};
use crate::collision::SolidKind;

fn solid(center: (f32, f32), size: (f32, f32), kind: SolidKind) -> SolidDef {
    SolidDef {
        center,
        half_extents: (size.0 * 0.5, size.1 * 0.5),
        kind,
        active: true,
    }
}

/// Small room with every solid kind, used when no level file loads.
pub fn test_room_level() -> LevelDef {
    LevelDef {
        id: "dev_test_room".to_string(),
        name: "Test Room".to_string(),
        spawn: (0.0, 100.0),
        solids: vec![
            // Ground
            solid((0.0, -200.0), (800.0, 40.0), SolidKind::Floor),
            // Ceiling
            solid((0.0, 300.0), (800.0, 40.0), SolidKind::Ceiling),
            // Left and right walls
            solid((-420.0, 50.0), (40.0, 500.0), SolidKind::Wall),
            solid((420.0, 50.0), (40.0, 500.0), SolidKind::Wall),
            // One-way platforms
            solid((-250.0, -50.0), (150.0, 20.0), SolidKind::Platform),
            solid((250.0, 50.0), (150.0, 20.0), SolidKind::Platform),
            solid((0.0, 150.0), (120.0, 20.0), SolidKind::Platform),
            // Solid crate to jump onto and bump into
            solid((120.0, -160.0), (40.0, 40.0), SolidKind::Block),
            // Pillar, solid on every side
            solid((-100.0, -80.0), (30.0, 200.0), SolidKind::Block),
        ],
    }
}
