//! Movement domain: grounded horizontal velocity and facing.

use bevy::prelude::*;

use crate::movement::{Actor, Facing, MovementInput, MovementState, MovementTuning, Velocity};

/// Reduce a raw axis value to -1, 0 or 1. NaN counts as no input and
/// anything outside [-1, 1] is clamped first.
pub fn axis_direction(axis: f32) -> f32 {
    if axis.is_nan() {
        return 0.0;
    }
    let axis = axis.clamp(-1.0, 1.0);
    if axis > 0.0 {
        1.0
    } else if axis < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Movement stage for one actor.
///
/// Airborne actors keep whatever velocity and facing they have: there is no
/// air control. Grounded actors move at full speed in the input direction
/// and face it; zero input stops them but keeps the facing.
pub fn apply_horizontal_input(
    state: &mut MovementState,
    velocity: &mut Vec2,
    axis: f32,
    tuning: &MovementTuning,
) {
    if !state.is_grounded() {
        return;
    }

    let direction = axis_direction(axis);
    velocity.x = direction * tuning.move_speed;

    if direction > 0.0 {
        state.facing = Facing::Right;
    } else if direction < 0.0 {
        state.facing = Facing::Left;
    }
}

pub(crate) fn apply_horizontal_movement(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut MovementState, &mut Velocity), With<Actor>>,
) {
    for (mut state, mut velocity) in &mut query {
        apply_horizontal_input(&mut state, &mut velocity.0, input.axis, &tuning);
    }
}
