//! Collision domain: static solids, AABB resolution and proximity queries.

mod aabb;
mod resolve;
mod sensor;
mod solid;
mod systems;


pub use aabb::{Aabb, ActorShape};
pub use resolve::{Contacts, Resolution, ResolutionOrder, resolve};
pub use sensor::{WallSensor, floor_beneath, sense_walls};
pub use solid::{InvalidSolid, Solid, SolidKind, SolidOrder};
pub use systems::SolidSnapshot;

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::collision::systems::{apply_solid_toggles, snapshot_solids};
use crate::core::SimulationSet;

/// Enable or disable a solid between ticks, e.g. for doors and hazards.
#[derive(Debug)]
pub struct SetSolidActiveEvent {
    pub entity: Entity,
    pub active: bool,
}

impl Message for SetSolidActiveEvent {}

pub struct CollisionPlugin;

impl Plugin for CollisionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SolidSnapshot>()
            .add_message::<SetSolidActiveEvent>()
            .add_systems(
                Update,
                (apply_solid_toggles, snapshot_solids)
                    .chain()
                    .in_set(SimulationSet::Input),
            );
    }
}
