//! Position synchronization between the orbital model and the scene graph.
//!
//! Copies each body's local orbital offset onto its orbital node. World
//! placement comes from Bevy's transform propagation, which composes moon
//! offsets onto their planet's node.

use bevy::prelude::*;

use crate::orbit::SolarSystem;
use crate::render::bodies::OrbitalNode;

/// Sync orbital node translations from the model.
///
/// Runs after the model advances and before transforms propagate.
pub fn sync_orbital_nodes(
    mut query: Query<(&mut Transform, &OrbitalNode)>,
    system: Res<SolarSystem>,
) {
    for (mut transform, node) in query.iter_mut() {
        let Some(local) = system.local_position(node.id) else {
            continue;
        };
        transform.translation = local.as_vec3();
    }
}
