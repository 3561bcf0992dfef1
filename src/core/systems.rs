//! Core domain: per-tick clock update.

use bevy::prelude::*;

use crate::core::resources::{SimulationClock, clamp_tick_delta};
use crate::movement::MovementTuning;

pub(crate) fn advance_clock(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut clock: ResMut<SimulationClock>,
) {
    let measured = time.delta_secs();
    let dt = clamp_tick_delta(measured, tuning.max_tick_delta);

    if dt < measured {
        debug!(
            "Clamped tick delta from {:.4}s to {:.4}s (tick {})",
            measured, dt, clock.tick
        );
    }

    clock.dt = dt;
    clock.tick += 1;
}
