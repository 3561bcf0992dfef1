//! Collision domain: axis-aligned boxes and actor collision shapes.

use bevy::prelude::*;

/// Axis-aligned box stored as center and half extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec2,
    pub half: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, half: Vec2) -> Self {
        Self { center, half }
    }

    pub fn min(&self) -> Vec2 {
        self.center - self.half
    }

    pub fn max(&self) -> Vec2 {
        self.center + self.half
    }

    pub fn top(&self) -> f32 {
        self.center.y + self.half.y
    }

    pub fn bottom(&self) -> f32 {
        self.center.y - self.half.y
    }

    pub fn left(&self) -> f32 {
        self.center.x - self.half.x
    }

    pub fn right(&self) -> f32 {
        self.center.x + self.half.x
    }

    /// Strict overlap: boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.overlaps_x(other)
            && self.bottom() < other.top()
            && self.top() > other.bottom()
    }

    pub fn overlaps_x(&self, other: &Aabb) -> bool {
        self.left() < other.right() && self.right() > other.left()
    }

    /// Overlap test where `other` is extended upward by `band`.
    ///
    /// Used for landing surfaces so an actor resting just above the top edge
    /// still counts as touching it.
    pub fn overlaps_with_top_band(&self, other: &Aabb, band: f32) -> bool {
        self.overlaps_x(other)
            && self.bottom() < other.top() + band
            && self.top() > other.bottom()
    }

    /// Smallest per-axis penetration, or 0.0 when the boxes are apart.
    pub fn penetration_depth(&self, other: &Aabb) -> f32 {
        if !self.overlaps(other) {
            return 0.0;
        }
        let dx = (self.right().min(other.right()) - self.left().max(other.left())).max(0.0);
        let dy = (self.top().min(other.top()) - self.bottom().max(other.bottom())).max(0.0);
        dx.min(dy)
    }
}

/// Collision box of an actor relative to its logical position.
///
/// Built from an explicit hitbox when one exists, otherwise from the visual
/// bounds centered on the position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActorShape {
    pub half: Vec2,
    pub offset: Vec2,
}

impl ActorShape {
    pub fn new(size: Vec2, offset: Vec2) -> Self {
        Self {
            half: size * 0.5,
            offset,
        }
    }

    pub fn aabb_at(&self, position: Vec2) -> Aabb {
        Aabb::new(position + self.offset, self.half)
    }

    /// Position y that puts the shape's bottom edge at `bottom`.
    pub fn y_for_bottom(&self, bottom: f32) -> f32 {
        bottom + self.half.y - self.offset.y
    }

    /// Position y that puts the shape's top edge at `top`.
    pub fn y_for_top(&self, top: f32) -> f32 {
        top - self.half.y - self.offset.y
    }

    /// Position x that puts the shape's left edge at `left`.
    pub fn x_for_left(&self, left: f32) -> f32 {
        left + self.half.x - self.offset.x
    }

    /// Position x that puts the shape's right edge at `right`.
    pub fn x_for_right(&self, right: f32) -> f32 {
        right - self.half.x - self.offset.x
    }
}
