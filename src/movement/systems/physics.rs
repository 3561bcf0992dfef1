//! Movement domain: gravity, integration, collision and grounding.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::collision::{
    ActorShape, Contacts, Solid, SolidSnapshot, WallSensor, resolve, sense_walls,
};
use crate::core::SimulationClock;
use crate::movement::{
    Actor, ActorBounds, HeadBumpedEvent, Hitbox, JumpState, LandedEvent, LeftGroundEvent,
    MovementState, MovementTuning, Position, Velocity, actor_shape,
};

/// Grounding change produced by the physics stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundTransition {
    Landed,
    LeftGround,
}

/// Everything the physics stage observed for one actor this tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContactReport {
    pub walls: WallSensor,
    pub contacts: Contacts,
    pub transition: Option<GroundTransition>,
}

/// Grounded actors have no vertical speed. Airborne actors accelerate down,
/// capped at the terminal fall speed.
pub fn apply_gravity(jump: JumpState, velocity: &mut Vec2, dt: f32, tuning: &MovementTuning) {
    match jump {
        JumpState::Grounded => velocity.y = 0.0,
        JumpState::Airborne => {
            velocity.y = (velocity.y - tuning.gravity * dt).max(-tuning.max_fall_speed);
        }
    }
}

/// Next jump state from this tick's collision results. Only landing grounds
/// an actor; a grounded actor with no floor contact has walked off an edge.
pub fn settle_jump_state(
    state: &mut MovementState,
    landed: bool,
    tuning: &MovementTuning,
) -> Option<GroundTransition> {
    match (landed, state.jump) {
        (true, JumpState::Airborne) => {
            state.jump = JumpState::Grounded;
            state.coyote_timer = tuning.coyote_time;
            Some(GroundTransition::Landed)
        }
        (true, JumpState::Grounded) => {
            state.coyote_timer = tuning.coyote_time;
            None
        }
        (false, JumpState::Grounded) => {
            state.jump = JumpState::Airborne;
            Some(GroundTransition::LeftGround)
        }
        (false, JumpState::Airborne) => None,
    }
}

/// Physics stage for one actor against a snapshot of active solids.
pub fn step_physics(
    position: &mut Vec2,
    velocity: &mut Vec2,
    state: &mut MovementState,
    shape: &ActorShape,
    solids: &[Solid],
    dt: f32,
    tuning: &MovementTuning,
) -> ContactReport {
    let walls = sense_walls(&shape.aabb_at(*position), solids, tuning.wall_sense_distance);
    state.touching_left_wall = walls.left;
    state.touching_right_wall = walls.right;

    apply_gravity(state.jump, velocity, dt, tuning);

    if walls.blocks(velocity.x) {
        velocity.x = 0.0;
    }

    let tentative = *position + *velocity * dt;

    let resolution = resolve(
        shape,
        *position,
        tentative,
        *velocity,
        solids,
        tuning.collision_tolerance,
        tuning.resolution_order,
    );

    let transition = settle_jump_state(state, resolution.contacts.landed, tuning);

    *position = resolution.position;
    *velocity = resolution.velocity;

    ContactReport {
        walls,
        contacts: resolution.contacts,
        transition,
    }
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn apply_physics(
    clock: Res<SimulationClock>,
    tuning: Res<MovementTuning>,
    snapshot: Res<SolidSnapshot>,
    mut query: Query<
        (
            Entity,
            &mut Position,
            &mut Velocity,
            &mut MovementState,
            &ActorBounds,
            Option<&Hitbox>,
        ),
        With<Actor>,
    >,
    mut landed: MessageWriter<LandedEvent>,
    mut left_ground: MessageWriter<LeftGroundEvent>,
    mut bumped: MessageWriter<HeadBumpedEvent>,
) {
    for (entity, mut position, mut velocity, mut state, bounds, hitbox) in &mut query {
        let shape = actor_shape(bounds, hitbox);
        let report = step_physics(
            &mut position.0,
            &mut velocity.0,
            &mut state,
            &shape,
            &snapshot.solids,
            clock.dt,
            &tuning,
        );

        match report.transition {
            Some(GroundTransition::Landed) => {
                debug!(
                    "Landed: entity={:?}, surface={:?}, position={:?}",
                    entity, report.contacts.landed_on, position.0
                );
                landed.write(LandedEvent {
                    entity,
                    surface: report.contacts.landed_on,
                });
            }
            Some(GroundTransition::LeftGround) => {
                debug!("Left ground: entity={:?}, position={:?}", entity, position.0);
                left_ground.write(LeftGroundEvent { entity });
            }
            None => {}
        }

        if report.contacts.hit_ceiling {
            bumped.write(HeadBumpedEvent { entity });
        }
    }
}
