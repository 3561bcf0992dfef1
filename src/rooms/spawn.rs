//! Rooms domain: solid and actor spawning helpers.

use bevy::prelude::*;

use crate::collision::{Solid, SolidOrder, floor_beneath};
use crate::movement::{
    Actor, Facing, MovementState, MovementTuning, Position, Velocity, actor_shape,
};
use crate::rooms::components::{ACTOR_LAYER, RoomMember, SOLID_LAYER};

/// Spawn a room solid. `order` is its index in the level's solid list.
pub fn spawn_solid(commands: &mut Commands, solid: Solid, order: u32) -> Entity {
    commands
        .spawn((
            RoomMember,
            solid,
            SolidOrder(order),
            Transform::from_xyz(solid.center.x, solid.center.y, SOLID_LAYER),
        ))
        .id()
}

/// Spawn the actor at `spawn`. It starts airborne, so the first physics tick
/// decides whether it is standing on anything.
pub fn spawn_actor(commands: &mut Commands, spawn: Vec2, tuning: &MovementTuning) -> Entity {
    let mut entity = commands.spawn((
        RoomMember,
        Actor,
        Position(spawn),
        Velocity::default(),
        MovementState::spawned(Facing::Right),
        tuning.actor_bounds(),
        Transform::from_xyz(spawn.x, spawn.y, ACTOR_LAYER),
    ));
    if let Some(hitbox) = tuning.actor_hitbox() {
        entity.insert(hitbox);
    }
    entity.id()
}

/// Reset an existing actor to `spawn` as if freshly spawned. Facing is kept.
pub fn reset_actor(
    position: &mut Position,
    velocity: &mut Velocity,
    state: &mut MovementState,
    spawn: Vec2,
) {
    position.0 = spawn;
    velocity.0 = Vec2::ZERO;
    *state = MovementState::spawned(state.facing);
}

/// Log where an actor spawned at `spawn` will come to rest.
pub(crate) fn report_spawn_support(spawn: Vec2, solids: &[Solid], tuning: &MovementTuning) {
    let shape = actor_shape(&tuning.actor_bounds(), tuning.actor_hitbox().as_ref());
    match floor_beneath(&shape.aabb_at(spawn), solids, f32::MAX) {
        Some((surface, gap)) => debug!(
            "Spawn at {:?} drops {:.2} onto {:?} at {:?}",
            spawn, gap, surface.kind, surface.center
        ),
        None => warn!("Spawn at {:?} has no landing surface beneath it", spawn),
    }
}
