//! Rooms domain: room build, teardown and respawn systems.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::collision::SolidSnapshot;
use crate::content::LevelRegistry;
use crate::core::SimulationPaused;
use crate::movement::{Actor, MovementState, MovementTuning, Position, Velocity};
use crate::rooms::components::{CurrentRoom, ROOM_PAUSE_SOURCE, RoomMember};
use crate::rooms::events::{BuildRoomEvent, RespawnEvent, TeardownRoomEvent};
use crate::rooms::spawn::{report_spawn_support, reset_actor, spawn_actor, spawn_solid};

fn despawn_room(commands: &mut Commands, members: &Query<Entity, With<RoomMember>>) -> usize {
    let mut count = 0;
    for entity in members.iter() {
        commands.entity(entity).despawn();
        count += 1;
    }
    count
}

pub(crate) fn handle_build_room(
    mut commands: Commands,
    mut events: MessageReader<BuildRoomEvent>,
    registry: Res<LevelRegistry>,
    tuning: Res<MovementTuning>,
    members: Query<Entity, With<RoomMember>>,
    mut current: ResMut<CurrentRoom>,
    mut paused: ResMut<SimulationPaused>,
) {
    // Only the most recent request matters
    let Some(event) = events.read().last() else {
        return;
    };

    let Some(level) = registry.get(&event.level_id) else {
        error!("Cannot build room: unknown level '{}'", event.level_id);
        return;
    };

    let solids = match level.build_solids() {
        Ok(solids) => solids,
        Err(e) => {
            error!("Cannot build room '{}': {}", level.id, e);
            return;
        }
    };

    let removed = despawn_room(&mut commands, &members);
    if removed > 0 {
        debug!("Replaced previous room ({} entities)", removed);
    }

    for (order, solid) in (0u32..).zip(&solids) {
        spawn_solid(&mut commands, *solid, order);
    }

    let spawn = level.spawn_point();
    report_spawn_support(spawn, &solids, &tuning);
    spawn_actor(&mut commands, spawn, &tuning);

    current.level_id = Some(level.id.clone());
    current.spawn = spawn;
    paused.unpause(ROOM_PAUSE_SOURCE);

    info!(
        "Built room '{}' ({}): {} solids, spawn at {:?}",
        level.id,
        level.name,
        solids.len(),
        spawn
    );
}

pub(crate) fn handle_teardown_room(
    mut commands: Commands,
    mut events: MessageReader<TeardownRoomEvent>,
    members: Query<Entity, With<RoomMember>>,
    mut current: ResMut<CurrentRoom>,
    mut snapshot: ResMut<SolidSnapshot>,
    mut paused: ResMut<SimulationPaused>,
) {
    if events.read().count() == 0 {
        return;
    }

    let removed = despawn_room(&mut commands, &members);
    snapshot.solids.clear();
    paused.pause(ROOM_PAUSE_SOURCE);
    info!(
        "Tore down room {:?} ({} entities)",
        current.level_id, removed
    );
    *current = CurrentRoom::default();
}

pub(crate) fn handle_respawn(
    mut commands: Commands,
    mut events: MessageReader<RespawnEvent>,
    current: Res<CurrentRoom>,
    tuning: Res<MovementTuning>,
    mut actors: Query<(&mut Position, &mut Velocity, &mut MovementState), With<Actor>>,
) {
    if events.read().count() == 0 {
        return;
    }

    if !current.is_built() {
        warn!("Respawn requested with no room built");
        return;
    }

    let mut reset = 0;
    for (mut position, mut velocity, mut state) in &mut actors {
        reset_actor(&mut position, &mut velocity, &mut state, current.spawn);
        reset += 1;
    }

    if reset == 0 {
        spawn_actor(&mut commands, current.spawn, &tuning);
        debug!("Respawn created a new actor at {:?}", current.spawn);
    } else {
        debug!("Respawned {} actor(s) at {:?}", reset, current.spawn);
    }
}
