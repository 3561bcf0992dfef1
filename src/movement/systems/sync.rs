//! Movement domain: render transform sync and incomplete actor reporting.

use bevy::prelude::*;

use crate::movement::{Actor, ActorBounds, MovementState, Position, Velocity};

/// Copy committed positions into render transforms. Z is left alone; it only
/// orders sprites.
pub(crate) fn sync_transforms(
    mut query: Query<(&Position, &mut Transform), (With<Actor>, Changed<Position>)>,
) {
    for (position, mut transform) in &mut query {
        transform.translation.x = position.0.x;
        transform.translation.y = position.0.y;
    }
}

/// Actors missing stage data are skipped by the stage queries; note them at
/// debug level so the omission is visible.
pub(crate) fn report_incomplete_actors(
    query: Query<
        (
            Entity,
            Has<Position>,
            Has<Velocity>,
            Has<MovementState>,
            Has<ActorBounds>,
        ),
        With<Actor>,
    >,
) {
    for (entity, position, velocity, state, bounds) in &query {
        if position && velocity && state && bounds {
            continue;
        }
        debug!(
            "Skipping actor {:?}: position={}, velocity={}, movement_state={}, bounds={}",
            entity, position, velocity, state, bounds
        );
    }
}
