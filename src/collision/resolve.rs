//! Collision domain: resolving a tentative actor position against solids.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::aabb::{Aabb, ActorShape};
use super::solid::{Solid, SolidKind};

/// Order in which overlapping solids are resolved. Later solids overwrite
/// earlier snaps on the same axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum ResolutionOrder {
    /// Solids in the order they were supplied.
    #[default]
    Insertion,
    /// Deepest penetration first, so the tightest contact is written last.
    PenetrationDepth,
}

/// Contacts recorded while resolving one tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Contacts {
    pub landed: bool,
    pub landed_on: Option<SolidKind>,
    pub hit_ceiling: bool,
    pub blocked_left: bool,
    pub blocked_right: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub position: Vec2,
    pub velocity: Vec2,
    pub contacts: Contacts,
}

/// Resolve `tentative` against every active solid.
///
/// `previous` is the position at the start of the tick; it decides the
/// approach direction for one-way surfaces and side hits. A single pass is
/// made with no priority between solids.
pub fn resolve(
    shape: &ActorShape,
    previous: Vec2,
    tentative: Vec2,
    velocity: Vec2,
    solids: &[Solid],
    tolerance: f32,
    order: ResolutionOrder,
) -> Resolution {
    let mut res = Resolution {
        position: tentative,
        velocity,
        contacts: Contacts::default(),
    };
    let before = shape.aabb_at(previous);

    let mut active: Vec<&Solid> = solids.iter().filter(|s| s.active).collect();
    if order == ResolutionOrder::PenetrationDepth {
        let moved = shape.aabb_at(tentative);
        active.sort_by(|a, b| {
            let da = moved.penetration_depth(&a.aabb());
            let db = moved.penetration_depth(&b.aabb());
            db.total_cmp(&da)
        });
    }

    for solid in active {
        match solid.kind {
            SolidKind::Floor | SolidKind::Platform => {
                land_on_top(&mut res, shape, &before, solid, tolerance);
            }
            SolidKind::Ceiling => {
                bump_from_below(&mut res, shape, &before, solid, tolerance);
            }
            SolidKind::Wall => {
                block_sideways(&mut res, shape, &before, solid);
            }
            SolidKind::Block => {
                if !land_on_top(&mut res, shape, &before, solid, tolerance)
                    && !bump_from_below(&mut res, shape, &before, solid, tolerance)
                {
                    block_sideways(&mut res, shape, &before, solid);
                }
            }
        }
    }

    res
}

/// Landing from above. The overlap test uses a band of `2 * tolerance` above
/// the surface so a resting actor, snapped `tolerance` above it, keeps
/// touching it on the next tick.
fn land_on_top(
    res: &mut Resolution,
    shape: &ActorShape,
    before: &Aabb,
    solid: &Solid,
    tolerance: f32,
) -> bool {
    if res.velocity.y > 0.0 {
        return false;
    }
    let surface = solid.aabb();
    if before.bottom() < surface.top() - tolerance {
        return false;
    }
    if !shape
        .aabb_at(res.position)
        .overlaps_with_top_band(&surface, tolerance * 2.0)
    {
        return false;
    }

    res.position.y = shape.y_for_bottom(surface.top() + tolerance);
    res.velocity.y = 0.0;
    res.contacts.landed = true;
    res.contacts.landed_on = Some(solid.kind);
    true
}

fn bump_from_below(
    res: &mut Resolution,
    shape: &ActorShape,
    before: &Aabb,
    solid: &Solid,
    tolerance: f32,
) -> bool {
    if res.velocity.y <= 0.0 {
        return false;
    }
    let surface = solid.aabb();
    if before.top() > surface.bottom() + tolerance {
        return false;
    }
    if !shape.aabb_at(res.position).overlaps(&surface) {
        return false;
    }

    res.position.y = shape.y_for_top(surface.bottom() - tolerance);
    res.velocity.y = 0.0;
    res.contacts.hit_ceiling = true;
    true
}

fn block_sideways(res: &mut Resolution, shape: &ActorShape, before: &Aabb, solid: &Solid) -> bool {
    if res.velocity.x == 0.0 {
        return false;
    }
    let surface = solid.aabb();
    if !shape.aabb_at(res.position).overlaps(&surface) {
        return false;
    }

    if before.center.x < surface.center.x {
        res.position.x = shape.x_for_right(surface.left());
        res.contacts.blocked_right = true;
    } else {
        res.position.x = shape.x_for_left(surface.right());
        res.contacts.blocked_left = true;
    }
    res.velocity.x = 0.0;
    true
}
