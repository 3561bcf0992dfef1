//! Movement domain: actor components, tuning, and the movement, jump and
//! physics stages.

mod components;
mod events;
mod resources;
mod systems;


pub use components::{
    Actor, ActorBounds, Facing, Hitbox, JumpState, MovementState, Position, Velocity, actor_shape,
};
pub use events::{HeadBumpedEvent, JumpedEvent, LandedEvent, LeftGroundEvent};
pub use resources::{HitboxDef, MovementInput, MovementTuning};
pub use systems::{
    ContactReport, GroundTransition, JumpOutcome, apply_gravity, apply_horizontal_input,
    axis_direction, read_keyboard_input, settle_jump_state, step_jump, step_physics,
    tick_jump_timers,
};

use bevy::prelude::*;

use crate::core::SimulationSet;
use crate::movement::systems::{
    apply_horizontal_movement, apply_jump, apply_physics, report_incomplete_actors,
    sync_transforms,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_message::<JumpedEvent>()
            .add_message::<LandedEvent>()
            .add_message::<LeftGroundEvent>()
            .add_message::<HeadBumpedEvent>()
            .add_systems(
                Update,
                report_incomplete_actors.in_set(SimulationSet::Input),
            )
            .add_systems(
                Update,
                apply_horizontal_movement.in_set(SimulationSet::Movement),
            )
            .add_systems(Update, apply_jump.in_set(SimulationSet::Jump))
            .add_systems(Update, apply_physics.in_set(SimulationSet::Physics))
            .add_systems(Update, sync_transforms.in_set(SimulationSet::Sync));
    }
}
