//! Rooms domain: events for building, tearing down and respawning.

use bevy::ecs::message::Message;

/// Replace the current room with the level registered under `level_id`.
#[derive(Debug)]
pub struct BuildRoomEvent {
    pub level_id: String,
}

impl Message for BuildRoomEvent {}

/// Despawn the current room's solids and actor.
#[derive(Debug)]
pub struct TeardownRoomEvent;

impl Message for TeardownRoomEvent {}

/// Put the actor back at the room's spawn point.
#[derive(Debug)]
pub struct RespawnEvent;

impl Message for RespawnEvent {}
