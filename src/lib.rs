//! Movement and collision core for a side-scrolling platformer.
//!
//! Each tick runs three stages in order over the actor's components:
//! movement (grounded horizontal velocity and facing), jump (rising-edge
//! requests, buffer and coyote timers) and physics (gravity, integration,
//! AABB resolution against static solids). The physics stage is the only
//! place an actor becomes grounded.
//!
//! The stage functions are plain functions over plain data and can be driven
//! without an `App`; [`SimulationPlugin`] wires them into Bevy.

pub mod collision;
pub mod content;
pub mod core;
pub mod movement;
pub mod rooms;

use bevy::prelude::*;

/// Everything the simulation needs except input acquisition and content
/// loading.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            core::CorePlugin,
            collision::CollisionPlugin,
            movement::MovementPlugin,
            rooms::RoomsPlugin,
        ));
    }
}
