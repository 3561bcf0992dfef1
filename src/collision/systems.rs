//! Collision domain: solid toggling and the per-tick solid snapshot.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::collision::{SetSolidActiveEvent, Solid, SolidOrder};

/// Active solids for the current tick, sorted by `SolidOrder`. Read-only while
/// the physics stage runs.
#[derive(Resource, Debug, Default)]
pub struct SolidSnapshot {
    pub solids: Vec<Solid>,
}

pub(crate) fn apply_solid_toggles(
    mut events: MessageReader<SetSolidActiveEvent>,
    mut solids: Query<&mut Solid>,
) {
    for event in events.read() {
        match solids.get_mut(event.entity) {
            Ok(mut solid) => {
                if solid.active != event.active {
                    debug!(
                        "Solid {:?} ({:?}) active: {} -> {}",
                        event.entity, solid.kind, solid.active, event.active
                    );
                    solid.active = event.active;
                }
            }
            Err(_) => {
                debug!("Ignoring toggle for missing solid {:?}", event.entity);
            }
        }
    }
}

pub(crate) fn snapshot_solids(
    solids: Query<(&Solid, Option<&SolidOrder>)>,
    mut snapshot: ResMut<SolidSnapshot>,
) {
    let mut ordered: Vec<(u32, Solid)> = solids
        .iter()
        .filter(|(solid, _)| solid.active)
        .map(|(solid, order)| (order.map_or(u32::MAX, |o| o.0), *solid))
        .collect();
    // Stable, so unordered solids keep query order among themselves.
    ordered.sort_by_key(|(order, _)| *order);

    snapshot.solids.clear();
    snapshot
        .solids
        .extend(ordered.into_iter().map(|(_, solid)| solid));
}
