//! Movement domain: system modules for the per-tick stages.

pub(crate) mod input;
pub(crate) mod jump;
pub(crate) mod movement;
pub(crate) mod physics;
pub(crate) mod sync;

pub use input::read_keyboard_input;
pub use jump::{JumpOutcome, step_jump, tick_jump_timers};
pub use movement::{apply_horizontal_input, axis_direction};
pub use physics::{ContactReport, GroundTransition, apply_gravity, settle_jump_state, step_physics};

pub(crate) use jump::apply_jump;
pub(crate) use movement::apply_horizontal_movement;
pub(crate) use physics::apply_physics;
pub(crate) use sync::{report_incomplete_actors, sync_transforms};
