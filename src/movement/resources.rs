//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::collision::ResolutionOrder;
use crate::movement::{ActorBounds, Hitbox};

/// Simulation constants. Loaded from `tuning.ron` or built in code, then
/// passed unchanged to every stage.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    pub move_speed: f32,
    pub jump_velocity: f32,
    pub gravity: f32,
    pub max_fall_speed: f32,
    pub jump_buffer_time: f32,
    pub coyote_time: f32,
    pub collision_tolerance: f32,
    /// Lookahead used when checking for walls beside the actor.
    pub wall_sense_distance: f32,
    pub actor_width: f32,
    pub actor_height: f32,
    /// Collision box override; the visual size is used when absent.
    pub hitbox: Option<HitboxDef>,
    /// Largest delta the driver passes to a tick.
    pub max_tick_delta: f32,
    pub resolution_order: ResolutionOrder,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct HitboxDef {
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub offset: (f32, f32),
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: 200.0,
            jump_velocity: 520.0,
            gravity: 1500.0,
            max_fall_speed: 900.0,
            jump_buffer_time: 0.12,
            coyote_time: 0.1,
            collision_tolerance: 0.01,
            wall_sense_distance: 1.0,
            actor_width: 24.0,
            actor_height: 48.0,
            hitbox: None,
            max_tick_delta: 0.05,
            resolution_order: ResolutionOrder::Insertion,
        }
    }
}

impl MovementTuning {
    /// Apex height of a jump from the ground: h = v² / (2g)
    pub fn single_jump_height(&self) -> f32 {
        if self.gravity <= 0.0 {
            return f32::INFINITY;
        }
        self.jump_velocity * self.jump_velocity / (2.0 * self.gravity)
    }

    /// Seconds from take-off back to take-off height, ignoring the fall cap.
    pub fn jump_air_time(&self) -> f32 {
        if self.gravity <= 0.0 {
            return f32::INFINITY;
        }
        2.0 * self.jump_velocity / self.gravity
    }

    pub fn actor_bounds(&self) -> ActorBounds {
        ActorBounds {
            size: Vec2::new(self.actor_width, self.actor_height),
        }
    }

    pub fn actor_hitbox(&self) -> Option<Hitbox> {
        self.hitbox.map(|def| Hitbox {
            size: Vec2::new(def.width, def.height),
            offset: Vec2::new(def.offset.0, def.offset.1),
        })
    }
}

/// Per-tick input snapshot, filled by whatever polls the controller.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct MovementInput {
    /// Horizontal axis in [-1, 1], already deadzone-filtered.
    pub axis: f32,
    pub jump_held: bool,
}
