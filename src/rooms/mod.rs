//! Rooms domain: building level geometry, spawning and respawning the actor.

mod components;
mod events;
mod spawn;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{ACTOR_LAYER, CurrentRoom, ROOM_PAUSE_SOURCE, RoomMember, SOLID_LAYER};
pub use events::{BuildRoomEvent, RespawnEvent, TeardownRoomEvent};
pub use spawn::{reset_actor, spawn_actor, spawn_solid};

use bevy::prelude::*;

use crate::content::LevelRegistry;
use crate::core::SimulationSet;
use crate::rooms::systems::{handle_build_room, handle_respawn, handle_teardown_room};

pub struct RoomsPlugin;

impl Plugin for RoomsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CurrentRoom>()
            .init_resource::<LevelRegistry>()
            .add_message::<BuildRoomEvent>()
            .add_message::<TeardownRoomEvent>()
            .add_message::<RespawnEvent>()
            .add_systems(
                Update,
                (handle_teardown_room, handle_build_room, handle_respawn)
                    .chain()
                    .before(SimulationSet::Input),
            );
    }
}
