//! Movement domain: jump requests, impulses and grace timers.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::SimulationClock;
use crate::movement::{
    Actor, JumpState, JumpedEvent, MovementInput, MovementState, MovementTuning, Velocity,
};

/// What the jump stage did this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpOutcome {
    Idle,
    /// A press arrived while a jump was illegal and was queued.
    Buffered,
    Jumped {
        buffered: bool,
        coyote: bool,
    },
}

/// Count the grace timers down by `dt`, floored at zero. The coyote timer is
/// held at its maximum while grounded and only decays in the air.
pub fn tick_jump_timers(state: &mut MovementState, dt: f32, tuning: &MovementTuning) {
    if state.is_grounded() {
        state.coyote_timer = tuning.coyote_time;
    } else {
        state.coyote_timer = (state.coyote_timer - dt).max(0.0);
    }
    state.jump_buffer_timer = (state.jump_buffer_timer - dt).max(0.0);
}

/// Jump stage for one actor.
///
/// Only the rising edge of `jump_held` requests a jump. A request that is not
/// legal right now is queued in the buffer timer, and a queued request fires
/// on the first tick the actor is grounded. Landing happens in the previous
/// physics stage, so the buffer is sampled before this tick's decay: a landing
/// less than `jump_buffer_time` after the press always fires.
pub fn step_jump(
    state: &mut MovementState,
    velocity: &mut Vec2,
    jump_held: bool,
    dt: f32,
    tuning: &MovementTuning,
) -> JumpOutcome {
    let just_pressed = jump_held && !state.jump_input_pressed;
    state.jump_input_pressed = jump_held;
    let buffer_live = state.jump_buffer_timer > 0.0;

    tick_jump_timers(state, dt, tuning);

    let mut outcome = JumpOutcome::Idle;

    if just_pressed {
        if state.can_jump() {
            let coyote = !state.is_grounded();
            launch(state, velocity, tuning);
            return JumpOutcome::Jumped {
                buffered: false,
                coyote,
            };
        }
        state.jump_buffer_timer = tuning.jump_buffer_time;
        outcome = JumpOutcome::Buffered;
    }

    if state.is_grounded() && buffer_live {
        launch(state, velocity, tuning);
        return JumpOutcome::Jumped {
            buffered: true,
            coyote: false,
        };
    }

    outcome
}

/// Grounded -> Airborne on a legal jump. Commits to full horizontal speed in
/// the facing direction and spends both grace windows.
fn launch(state: &mut MovementState, velocity: &mut Vec2, tuning: &MovementTuning) {
    velocity.y = tuning.jump_velocity;
    velocity.x = state.facing.sign() * tuning.move_speed;
    state.jump = JumpState::Airborne;
    state.jump_buffer_timer = 0.0;
    state.coyote_timer = 0.0;
}

pub(crate) fn apply_jump(
    clock: Res<SimulationClock>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(Entity, &mut MovementState, &mut Velocity), With<Actor>>,
    mut jumped: MessageWriter<JumpedEvent>,
) {
    for (entity, mut state, mut velocity) in &mut query {
        match step_jump(
            &mut state,
            &mut velocity.0,
            input.jump_held,
            clock.dt,
            &tuning,
        ) {
            JumpOutcome::Jumped { buffered, coyote } => {
                debug!(
                    "Jump: entity={:?}, buffered={}, coyote={}, velocity={:?}",
                    entity, buffered, coyote, velocity.0
                );
                jumped.write(JumpedEvent {
                    entity,
                    buffered,
                    coyote,
                });
            }
            JumpOutcome::Buffered => {
                debug!(
                    "Jump buffered: entity={:?}, window={}s",
                    entity, tuning.jump_buffer_time
                );
            }
            JumpOutcome::Idle => {}
        }
    }
}
