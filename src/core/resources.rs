//! Core domain: tick clock and pause tracking.

use bevy::prelude::*;
use std::collections::HashSet;

/// Resource tracking if the simulation should be paused.
/// The simulation is paused if any source is active.
#[derive(Resource, Debug, Default)]
pub struct SimulationPaused {
    pub sources: HashSet<String>,
}

impl SimulationPaused {
    pub fn is_paused(&self) -> bool {
        !self.sources.is_empty()
    }

    pub fn pause(&mut self, source: impl Into<String>) {
        self.sources.insert(source.into());
    }

    pub fn unpause(&mut self, source: impl Into<String>) {
        self.sources.remove(&source.into());
    }
}

/// Run condition: returns true only when the simulation is not paused
pub fn simulation_active(paused: Res<SimulationPaused>) -> bool {
    !paused.is_paused()
}

/// Delta time shared by every stage of the current tick.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct SimulationClock {
    /// Seconds for this tick, after clamping.
    pub dt: f32,
    /// Number of ticks run so far.
    pub tick: u64,
}

/// Run condition: skip the stages on ticks where no time passed
pub fn tick_elapsed(clock: Res<SimulationClock>) -> bool {
    clock.dt > 0.0
}

/// Clamp a measured frame delta to something the discrete collision pass can
/// handle. Non-finite or negative deltas become zero.
pub fn clamp_tick_delta(measured: f32, max_tick_delta: f32) -> f32 {
    if !measured.is_finite() || measured <= 0.0 {
        return 0.0;
    }
    measured.min(max_tick_delta)
}
