//! Rooms domain: markers and the current room resource.

use bevy::prelude::*;

/// Z layer for solid sprites.
pub const SOLID_LAYER: f32 = 0.0;
/// Z layer for the actor sprite, drawn above solids.
pub const ACTOR_LAYER: f32 = 1.0;

/// Pause source held while no room is built after a teardown.
pub const ROOM_PAUSE_SOURCE: &str = "room";

/// Marker for every entity owned by the current room. All of them are
/// despawned together on teardown.
#[derive(Component, Debug)]
pub struct RoomMember;

/// The room that is currently built, if any.
#[derive(Resource, Debug, Default)]
pub struct CurrentRoom {
    pub level_id: Option<String>,
    pub spawn: Vec2,
}

impl CurrentRoom {
    pub fn is_built(&self) -> bool {
        self.level_id.is_some()
    }
}
