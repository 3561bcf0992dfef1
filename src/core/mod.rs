//! Core domain: tick ordering, clock, and pause control.

mod resources;
mod systems;


pub use resources::{
    SimulationClock, SimulationPaused, clamp_tick_delta, simulation_active, tick_elapsed,
};

use bevy::prelude::*;

use crate::core::systems::advance_clock;

/// Stages of one simulation tick, run in this order.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Clock update and input snapshot.
    Input,
    /// Horizontal velocity and facing.
    Movement,
    /// Jump requests, impulses and grace timers.
    Jump,
    /// Gravity, integration, collision and grounding.
    Physics,
    /// Copy committed state to render transforms.
    Sync,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationPaused>()
            .init_resource::<SimulationClock>()
            .configure_sets(
                Update,
                (
                    SimulationSet::Input,
                    SimulationSet::Movement,
                    SimulationSet::Jump,
                    SimulationSet::Physics,
                    SimulationSet::Sync,
                )
                    .chain()
                    .run_if(simulation_active),
            )
            .configure_sets(
                Update,
                (
                    SimulationSet::Movement,
                    SimulationSet::Jump,
                    SimulationSet::Physics,
                )
                    .run_if(tick_elapsed),
            )
            .add_systems(Update, advance_clock.in_set(SimulationSet::Input));
    }
}
