//! Movement domain: messages for jump and grounding transitions.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::collision::SolidKind;

#[derive(Debug)]
pub struct JumpedEvent {
    pub entity: Entity,
    /// Fired from a queued press rather than the press itself.
    pub buffered: bool,
    /// Fired while airborne inside the coyote window.
    pub coyote: bool,
}

impl Message for JumpedEvent {}

#[derive(Debug)]
pub struct LandedEvent {
    pub entity: Entity,
    pub surface: Option<SolidKind>,
}

impl Message for LandedEvent {}

#[derive(Debug)]
pub struct LeftGroundEvent {
    pub entity: Entity,
}

impl Message for LeftGroundEvent {}

#[derive(Debug)]
pub struct HeadBumpedEvent {
    pub entity: Entity,
}

impl Message for HeadBumpedEvent {}
