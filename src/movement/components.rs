//! Movement domain: actor components.

use bevy::prelude::*;

use crate::collision::ActorShape;

/// Marker for the dynamic actor driven by the simulation.
#[derive(Component, Debug)]
pub struct Actor;

/// Authoritative world position. The render transform is synced from it.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Position(pub Vec2);

/// Velocity in units per second.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity(pub Vec2);

/// Full visual size of the actor, centered on its position.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct ActorBounds {
    pub size: Vec2,
}

/// Collision box that differs from the visual bounds.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub size: Vec2,
    /// Offset of the box center from the actor position.
    pub offset: Vec2,
}

/// Collision shape for an actor: the hitbox when present, otherwise the
/// visual bounds.
pub fn actor_shape(bounds: &ActorBounds, hitbox: Option<&Hitbox>) -> ActorShape {
    match hitbox {
        Some(hitbox) => ActorShape::new(hitbox.size, hitbox.offset),
        None => ActorShape::new(bounds.size, Vec2::ZERO),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JumpState {
    Grounded,
    #[default]
    Airborne,
}

#[derive(Component, Debug, Clone, PartialEq, Default)]
pub struct MovementState {
    pub jump: JumpState,
    pub facing: Facing,
    /// Seconds left in which a queued jump fires on landing.
    pub jump_buffer_timer: f32,
    /// Seconds left in which a jump is still legal after leaving the ground.
    pub coyote_timer: f32,
    /// Jump button state last tick, for rising-edge detection.
    pub jump_input_pressed: bool,
    pub touching_left_wall: bool,
    pub touching_right_wall: bool,
}

impl MovementState {
    /// State for a freshly spawned actor. Always airborne so the first
    /// physics tick grounds it against real geometry.
    pub fn spawned(facing: Facing) -> Self {
        Self {
            jump: JumpState::Airborne,
            facing,
            ..Default::default()
        }
    }

    pub fn is_grounded(&self) -> bool {
        self.jump == JumpState::Grounded
    }

    pub fn can_jump(&self) -> bool {
        self.is_grounded() || self.coyote_timer > 0.0
    }
}
