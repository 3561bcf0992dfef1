//! Rooms domain: App-level tests for room lifecycle and the tick pipeline.

use std::time::Duration;

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use super::{
    ACTOR_LAYER, BuildRoomEvent, CurrentRoom, ROOM_PAUSE_SOURCE, RespawnEvent, RoomMember,
    TeardownRoomEvent,
};
use crate::SimulationPlugin;
use crate::collision::{SetSolidActiveEvent, Solid, SolidKind, SolidSnapshot};
use crate::content::{LevelDef, LevelRegistry, SolidDef};
use crate::core::{SimulationClock, SimulationPaused, SimulationSet};
use crate::movement::{
    Actor, Facing, JumpedEvent, LandedEvent, LeftGroundEvent, MovementInput, MovementState,
    Position,
};

const DT: f32 = 1.0 / 64.0;

#[derive(Resource, Default)]
struct Seen {
    landed: usize,
    left_ground: usize,
    jumped: usize,
}

fn record_events(
    mut landed: MessageReader<LandedEvent>,
    mut left_ground: MessageReader<LeftGroundEvent>,
    mut jumped: MessageReader<JumpedEvent>,
    mut seen: ResMut<Seen>,
) {
    seen.landed += landed.read().count();
    seen.left_ground += left_ground.read().count();
    seen.jumped += jumped.read().count();
}

fn test_level() -> LevelDef {
    let def = |center, half_extents, kind| SolidDef {
        center,
        half_extents,
        kind,
        active: true,
    };
    LevelDef {
        id: "test".to_string(),
        name: "Test".to_string(),
        spawn: (0.0, 100.0),
        solids: vec![
            def((0.0, -20.0), (500.0, 20.0), SolidKind::Floor),
            def((-300.0, 100.0), (20.0, 200.0), SolidKind::Wall),
            def((200.0, 40.0), (60.0, 5.0), SolidKind::Platform),
        ],
    }
}

fn test_app() -> App {
    let mut app = App::new();
    app.init_resource::<Time>();
    app.add_plugins(SimulationPlugin);
    app.init_resource::<Seen>();
    app.add_systems(Update, record_events.after(SimulationSet::Physics));
    app.world_mut()
        .resource_mut::<LevelRegistry>()
        .insert(test_level());
    app
}

fn tick(app: &mut App) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(DT));
    app.update();
}

fn run(app: &mut App, ticks: usize) {
    for _ in 0..ticks {
        tick(app);
    }
}

fn build(app: &mut App, level_id: &str) {
    app.world_mut().write_message(BuildRoomEvent {
        level_id: level_id.to_string(),
    });
    tick(app);
}

fn actor(app: &mut App) -> (Position, MovementState) {
    let mut query = app
        .world_mut()
        .query_filtered::<(&Position, &MovementState), With<Actor>>();
    let (position, state) = query.single(app.world()).unwrap();
    (*position, state.clone())
}

fn count<F: bevy::ecs::query::QueryFilter>(app: &mut App) -> usize {
    let mut query = app.world_mut().query_filtered::<Entity, F>();
    query.iter(app.world()).count()
}

// -----------------------------------------------------------------------------
// Room lifecycle tests
// -----------------------------------------------------------------------------

#[test]
fn test_build_room_spawns_solids_and_actor() {
    let mut app = test_app();
    build(&mut app, "test");

    assert_eq!(count::<With<Solid>>(&mut app), 3);
    assert_eq!(count::<With<Actor>>(&mut app), 1);
    assert_eq!(count::<With<RoomMember>>(&mut app), 4);
    assert_eq!(
        app.world().resource::<CurrentRoom>().level_id.as_deref(),
        Some("test")
    );

    let (position, state) = actor(&mut app);
    assert_eq!(position.0.x, 0.0);
    assert!(position.0.y <= 100.0);
    assert!(!state.is_grounded());
}

#[test]
fn test_actor_lands_and_transform_follows() {
    let mut app = test_app();
    build(&mut app, "test");
    run(&mut app, 120);

    let (position, state) = actor(&mut app);
    assert!(state.is_grounded());
    // Default actor is 48 tall; floor top is 0.
    assert!((position.0.y - 24.01).abs() < 1e-3);
    assert_eq!(app.world().resource::<Seen>().landed, 1);

    let mut query = app
        .world_mut()
        .query_filtered::<&Transform, With<Actor>>();
    let transform = *query.single(app.world()).unwrap();
    assert_eq!(transform.translation.x, position.0.x);
    assert_eq!(transform.translation.y, position.0.y);
    assert_eq!(transform.translation.z, ACTOR_LAYER);
}

#[test]
fn test_unknown_level_builds_nothing() {
    let mut app = test_app();
    build(&mut app, "missing");

    assert_eq!(count::<With<RoomMember>>(&mut app), 0);
    assert!(!app.world().resource::<CurrentRoom>().is_built());
}

#[test]
fn test_rebuild_replaces_room() {
    let mut app = test_app();
    build(&mut app, "test");
    run(&mut app, 10);
    build(&mut app, "test");

    assert_eq!(count::<With<Actor>>(&mut app), 1);
    assert_eq!(count::<With<Solid>>(&mut app), 3);
}

#[test]
fn test_teardown_removes_everything() {
    let mut app = test_app();
    build(&mut app, "test");

    app.world_mut().write_message(TeardownRoomEvent);
    run(&mut app, 2);

    assert_eq!(count::<With<RoomMember>>(&mut app), 0);
    assert!(!app.world().resource::<CurrentRoom>().is_built());
    assert!(app.world().resource::<SolidSnapshot>().solids.is_empty());
}

#[test]
fn test_teardown_pauses_until_next_build() {
    let mut app = test_app();
    build(&mut app, "test");
    app.world_mut().write_message(TeardownRoomEvent);
    tick(&mut app);

    let paused = app.world().resource::<SimulationPaused>();
    assert!(paused.is_paused());
    assert!(paused.sources.contains(ROOM_PAUSE_SOURCE));

    let frozen_at = app.world().resource::<SimulationClock>().tick;
    run(&mut app, 5);
    assert_eq!(app.world().resource::<SimulationClock>().tick, frozen_at);

    build(&mut app, "test");
    assert!(!app.world().resource::<SimulationPaused>().is_paused());
    let (start, _) = actor(&mut app);
    run(&mut app, 5);
    let (later, _) = actor(&mut app);
    assert!(later.0.y < start.0.y);
    assert!(app.world().resource::<SimulationClock>().tick > frozen_at);
}

#[test]
fn test_snapshot_keeps_level_order() {
    let mut app = test_app();
    build(&mut app, "test");
    // Rebuilding recycles entities, which must not reorder the snapshot.
    build(&mut app, "test");
    tick(&mut app);

    let kinds: Vec<SolidKind> = app
        .world()
        .resource::<SolidSnapshot>()
        .solids
        .iter()
        .map(|solid| solid.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![SolidKind::Floor, SolidKind::Wall, SolidKind::Platform]
    );
}

// -----------------------------------------------------------------------------
// Respawn tests
// -----------------------------------------------------------------------------

#[test]
fn test_respawn_resets_actor_and_keeps_facing() {
    let mut app = test_app();
    build(&mut app, "test");
    run(&mut app, 120);

    app.world_mut().resource_mut::<MovementInput>().axis = -1.0;
    run(&mut app, 20);
    app.world_mut().resource_mut::<MovementInput>().axis = 0.0;
    let (walked, _) = actor(&mut app);
    assert!(walked.0.x < 0.0);

    app.world_mut().write_message(RespawnEvent);
    tick(&mut app);

    let (position, state) = actor(&mut app);
    assert_eq!(position.0.x, 0.0);
    assert!(position.0.y < 100.0 && position.0.y > 99.0);
    assert!(!state.is_grounded());
    assert_eq!(state.facing, Facing::Left);
    assert_eq!(count::<With<Actor>>(&mut app), 1);
}

#[test]
fn test_respawn_recreates_missing_actor() {
    let mut app = test_app();
    build(&mut app, "test");

    let mut query = app.world_mut().query_filtered::<Entity, With<Actor>>();
    let entity = query.single(app.world()).unwrap();
    app.world_mut().despawn(entity);
    assert_eq!(count::<With<Actor>>(&mut app), 0);

    app.world_mut().write_message(RespawnEvent);
    tick(&mut app);
    assert_eq!(count::<With<Actor>>(&mut app), 1);
}

// -----------------------------------------------------------------------------
// Pipeline tests
// -----------------------------------------------------------------------------

#[test]
fn test_disabling_floor_drops_actor() {
    let mut app = test_app();
    build(&mut app, "test");
    run(&mut app, 120);
    assert!(actor(&mut app).1.is_grounded());

    let mut query = app.world_mut().query::<(Entity, &Solid)>();
    let floor = query
        .iter(app.world())
        .find(|(_, solid)| solid.kind == SolidKind::Floor)
        .map(|(entity, _)| entity)
        .unwrap();

    app.world_mut().write_message(SetSolidActiveEvent {
        entity: floor,
        active: false,
    });
    tick(&mut app);

    assert!(!actor(&mut app).1.is_grounded());
    assert_eq!(app.world().resource::<Seen>().left_ground, 1);
    assert_eq!(app.world().resource::<SolidSnapshot>().solids.len(), 2);
}

#[test]
fn test_jump_input_drives_jump_event() {
    let mut app = test_app();
    build(&mut app, "test");
    run(&mut app, 120);

    app.world_mut().resource_mut::<MovementInput>().jump_held = true;
    tick(&mut app);
    // Holding the button does not repeat the jump.
    run(&mut app, 5);

    assert_eq!(app.world().resource::<Seen>().jumped, 1);
    let (position, state) = actor(&mut app);
    assert!(!state.is_grounded());
    assert!(position.0.y > 24.01);
}
